//! Top-level project files

use super::TemplateEntry;
use crate::config::DatabaseDriver;

pub(super) const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::project("go.mod", GO_MOD),
    TemplateEntry::project("main.go", MAIN_GO),
    TemplateEntry::project("README.md", README_MD),
    TemplateEntry::project(".gitignore", GITIGNORE),
    TemplateEntry::project(".env.example", ENV_EXAMPLE),
    TemplateEntry::project("Makefile", MAKEFILE),
    TemplateEntry::project("config.yaml", CONFIG_YAML),
    TemplateEntry::project("Dockerfile", DOCKERFILE),
    TemplateEntry::project(".dockerignore", DOCKERIGNORE),
    TemplateEntry::for_driver(
        "docker-compose.yml",
        DOCKER_COMPOSE_POSTGRES,
        DatabaseDriver::Postgres,
    ),
    TemplateEntry::for_driver("docker-compose.yml", DOCKER_COMPOSE_MYSQL, DatabaseDriver::Mysql),
];

/// go.mod template; dependencies are resolved by `go mod tidy`
pub const GO_MOD: &str = r"module {{.ModulePath}}

go 1.21
";

/// main.go template
pub const MAIN_GO: &str = r#"package main

import (
	"log"
	"os"

	"{{.ModulePath}}/internal/config"
	"{{.ModulePath}}/internal/server"
	"github.com/joho/godotenv"
)

func main() {
	// Load environment variables
	if err := godotenv.Load(); err != nil {
		log.Println("No .env file found")
	}

	cfg, err := config.Load()
	if err != nil {
		log.Fatalf("Failed to load config: %v", err)
	}

	srv := server.New(cfg)

	port := os.Getenv("PORT")
	if port == "" {
		port = cfg.Server.Port
	}

	log.Printf("Starting {{.ProjectName}} on port %s", port)
	if err := srv.Start(":" + port); err != nil {
		log.Fatalf("Failed to start server: %v", err)
	}
}
"#;

/// README.md template
pub const README_MD: &str = r"# {{.ProjectName}}

A Go API service generated by LupettoGo, built on gin and gorm.

## Quick Start

### Prerequisites

- Go 1.21 or later
- A running {{.DBDriver}} server (or Docker, see below)

### Setup

1. Fetch dependencies:
   ```bash
   go mod tidy
   ```

2. Copy the environment template and adjust the database settings:
   ```bash
   cp .env.example .env
   ```

3. Start the server:
   ```bash
   make run
   ```

4. Check http://localhost:8080/health

## Project Structure

```
{{.ProjectName}}/
├── main.go                  # Application entry point
├── config.yaml              # Default configuration
└── internal/
    ├── config/              # Configuration loading (viper)
    ├── database/            # {{.DBDriver}} connection (gorm)
    ├── handlers/            # HTTP handlers (gin)
    ├── middleware/          # HTTP middleware
    ├── models/              # gorm models
    ├── repositories/        # Data access
    ├── server/              # Router and server wiring
    └── services/            # Business logic
```

## Adding a module

From the project root:

```bash
lupettogo generate module product
```

This creates the model, repository, service and handler for `product`.
Register the handler in `internal/server/server.go` and add the model to
`database.Migrate`.

## Development

```bash
make test    # run the test suite
make build   # build ./bin/{{.ProjectName}}
```
";

/// .gitignore template
pub const GITIGNORE: &str = r"# Binaries
/bin/
*.exe
*.dll
*.so
*.dylib

# Test output
*.test
*.out
coverage.html

# Environment
.env

# Dependencies
/vendor/

# Editors
.idea/
.vscode/
*.swp
";

/// .env.example template
pub const ENV_EXAMPLE: &str = r"PORT=8080
SERVER_MODE=debug

DATABASE_DRIVER={{.DBDriver}}
DATABASE_HOST=localhost
DATABASE_PORT={{.DBPort}}
DATABASE_USER=
DATABASE_PASSWORD=
DATABASE_NAME={{.ProjectName}}

JWT_SECRET=change-me
JWT_EXPIRES_IN=24h
";

/// Makefile template
pub const MAKEFILE: &str = r"APP := {{.ProjectName}}

.PHONY: run build test tidy

run:
	go run .

build:
	go build -o bin/$(APP) .

test:
	go test ./...

tidy:
	go mod tidy
";

/// config.yaml template
pub const CONFIG_YAML: &str = r#"server:
  port: "8080"
  mode: debug

database:
  driver: {{.DBDriver}}
  host: localhost
  port: "{{.DBPort}}"
  user: ""
  password: ""
  name: {{.ProjectName}}

jwt:
  secret: change-me
  expires_in: 24h

api:
  version: v1
"#;

/// Dockerfile template
pub const DOCKERFILE: &str = r#"FROM golang:1.21-alpine AS builder

WORKDIR /app
COPY . .
RUN go mod tidy && CGO_ENABLED=0 GOOS=linux go build -o /out/{{.ProjectName}} .

FROM alpine:3.19

RUN apk add --no-cache ca-certificates
WORKDIR /app
COPY --from=builder /out/{{.ProjectName}} /app/server
COPY config.yaml /app/config.yaml

ENV PORT=8080
EXPOSE 8080

ENTRYPOINT ["/app/server"]
"#;

/// .dockerignore template
pub const DOCKERIGNORE: &str = r"bin/
.env
.git/
*.test
*.out
";

/// docker-compose.yml template for `PostgreSQL`
pub const DOCKER_COMPOSE_POSTGRES: &str = r#"services:
  app:
    build: .
    ports:
      - "8080:8080"
    environment:
      PORT: "8080"
      DATABASE_DRIVER: postgres
      DATABASE_HOST: db
      DATABASE_PORT: "{{.DBPort}}"
      DATABASE_USER: postgres
      DATABASE_PASSWORD: postgres
      DATABASE_NAME: {{.ProjectName}}
    depends_on:
      - db

  db:
    image: {{.DBImage}}
    environment:
      POSTGRES_USER: postgres
      POSTGRES_PASSWORD: postgres
      POSTGRES_DB: {{.ProjectName}}
    ports:
      - "{{.DBPort}}:{{.DBPort}}"
    volumes:
      - db-data:/var/lib/postgresql/data

volumes:
  db-data:
"#;

/// docker-compose.yml template for `MySQL`
pub const DOCKER_COMPOSE_MYSQL: &str = r#"services:
  app:
    build: .
    ports:
      - "8080:8080"
    environment:
      PORT: "8080"
      DATABASE_DRIVER: mysql
      DATABASE_HOST: db
      DATABASE_PORT: "{{.DBPort}}"
      DATABASE_USER: root
      DATABASE_PASSWORD: mysql
      DATABASE_NAME: {{.ProjectName}}
    depends_on:
      - db

  db:
    image: {{.DBImage}}
    environment:
      MYSQL_ROOT_PASSWORD: mysql
      MYSQL_DATABASE: {{.ProjectName}}
    ports:
      - "{{.DBPort}}:{{.DBPort}}"
    volumes:
      - db-data:/var/lib/mysql

volumes:
  db-data:
"#;
