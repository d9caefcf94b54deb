//! Files under `internal/`

use super::TemplateEntry;
use crate::config::DatabaseDriver;

pub(super) const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::project("internal/config/config.go", CONFIG_GO),
    TemplateEntry::for_driver(
        "internal/database/database.go",
        DATABASE_POSTGRES_GO,
        DatabaseDriver::Postgres,
    ),
    TemplateEntry::for_driver(
        "internal/database/database.go",
        DATABASE_MYSQL_GO,
        DatabaseDriver::Mysql,
    ),
    TemplateEntry::project("internal/server/server.go", SERVER_GO),
    TemplateEntry::project("internal/middleware/cors.go", CORS_GO),
    TemplateEntry::project("internal/middleware/auth.go", AUTH_MIDDLEWARE_GO),
    TemplateEntry::project("internal/models/example.go", EXAMPLE_MODEL_GO),
    TemplateEntry::project("internal/repositories/repositories.go", REPOSITORIES_GO),
    TemplateEntry::project("internal/repositories/example_repository.go", EXAMPLE_REPOSITORY_GO),
    TemplateEntry::project("internal/services/services.go", SERVICES_GO),
    TemplateEntry::project("internal/services/example_service.go", EXAMPLE_SERVICE_GO),
    TemplateEntry::project("internal/handlers/handlers.go", HANDLERS_GO),
    TemplateEntry::project("internal/handlers/example_handler.go", EXAMPLE_HANDLER_GO),
    TemplateEntry::project("internal/handlers/auth_handler.go", AUTH_HANDLER_GO),
];

/// internal/config/config.go template
pub const CONFIG_GO: &str = r#"package config

import (
	"strings"

	"github.com/spf13/viper"
)

type Config struct {
	Server   ServerConfig   `mapstructure:"server"`
	Database DatabaseConfig `mapstructure:"database"`
	JWT      JWTConfig      `mapstructure:"jwt"`
	API      APIConfig      `mapstructure:"api"`
}

type ServerConfig struct {
	Port string `mapstructure:"port"`
	Mode string `mapstructure:"mode"`
}

type DatabaseConfig struct {
	Driver   string `mapstructure:"driver"`
	Host     string `mapstructure:"host"`
	Port     string `mapstructure:"port"`
	User     string `mapstructure:"user"`
	Password string `mapstructure:"password"`
	Name     string `mapstructure:"name"`
}

type JWTConfig struct {
	Secret    string `mapstructure:"secret"`
	ExpiresIn string `mapstructure:"expires_in"`
}

type APIConfig struct {
	Version string `mapstructure:"version"`
}

// Load reads config.yaml (optional) and environment variables such as
// DATABASE_HOST, which override file values.
func Load() (*Config, error) {
	viper.SetConfigName("config")
	viper.SetConfigType("yaml")
	viper.AddConfigPath(".")
	viper.AddConfigPath("./config")

	viper.SetEnvKeyReplacer(strings.NewReplacer(".", "_"))
	viper.AutomaticEnv()

	setDefaults()

	if err := viper.ReadInConfig(); err != nil {
		if _, ok := err.(viper.ConfigFileNotFoundError); !ok {
			return nil, err
		}
	}

	var cfg Config
	if err := viper.Unmarshal(&cfg); err != nil {
		return nil, err
	}

	return &cfg, nil
}

func setDefaults() {
	viper.SetDefault("server.port", "8080")
	viper.SetDefault("server.mode", "debug")
	viper.SetDefault("database.driver", "{{.DBDriver}}")
	viper.SetDefault("database.host", "localhost")
	viper.SetDefault("database.port", "{{.DBPort}}")
	viper.SetDefault("database.name", "{{.ProjectName}}")
	viper.SetDefault("jwt.expires_in", "24h")
	viper.SetDefault("api.version", "v1")
}
"#;

/// internal/database/database.go template for `PostgreSQL`
pub const DATABASE_POSTGRES_GO: &str = r#"package database

import (
	"fmt"
	"log"

	"{{.ModulePath}}/internal/config"
	"gorm.io/driver/postgres"
	"gorm.io/gorm"
	"gorm.io/gorm/logger"
)

// NewConnection opens a PostgreSQL connection using the database section of cfg.
func NewConnection(cfg *config.Config) (*gorm.DB, error) {
	if cfg.Database.Driver != "postgres" {
		return nil, fmt.Errorf("unsupported database driver: %s", cfg.Database.Driver)
	}

	dsn := fmt.Sprintf("host=%s user=%s password=%s dbname=%s port=%s sslmode=disable TimeZone=UTC",
		cfg.Database.Host,
		cfg.Database.User,
		cfg.Database.Password,
		cfg.Database.Name,
		cfg.Database.Port,
	)

	db, err := gorm.Open(postgres.Open(dsn), &gorm.Config{
		Logger: logger.Default.LogMode(logger.Info),
	})
	if err != nil {
		return nil, fmt.Errorf("failed to connect to database: %w", err)
	}

	return db, nil
}

// Migrate runs gorm auto-migrations. Add new models here.
func Migrate(db *gorm.DB) error {
	if err := db.AutoMigrate(); err != nil {
		return err
	}
	log.Println("Database migration completed")
	return nil
}
"#;

/// internal/database/database.go template for `MySQL`
pub const DATABASE_MYSQL_GO: &str = r#"package database

import (
	"fmt"
	"log"

	"{{.ModulePath}}/internal/config"
	"gorm.io/driver/mysql"
	"gorm.io/gorm"
	"gorm.io/gorm/logger"
)

// NewConnection opens a MySQL connection using the database section of cfg.
func NewConnection(cfg *config.Config) (*gorm.DB, error) {
	if cfg.Database.Driver != "mysql" {
		return nil, fmt.Errorf("unsupported database driver: %s", cfg.Database.Driver)
	}

	dsn := fmt.Sprintf("%s:%s@tcp(%s:%s)/%s?charset=utf8mb4&parseTime=True&loc=Local",
		cfg.Database.User,
		cfg.Database.Password,
		cfg.Database.Host,
		cfg.Database.Port,
		cfg.Database.Name,
	)

	db, err := gorm.Open(mysql.Open(dsn), &gorm.Config{
		Logger: logger.Default.LogMode(logger.Info),
	})
	if err != nil {
		return nil, fmt.Errorf("failed to connect to database: %w", err)
	}

	return db, nil
}

// Migrate runs gorm auto-migrations. Add new models here.
func Migrate(db *gorm.DB) error {
	if err := db.AutoMigrate(); err != nil {
		return err
	}
	log.Println("Database migration completed")
	return nil
}
"#;

/// internal/server/server.go template
pub const SERVER_GO: &str = r#"package server

import (
	"log"
	"net/http"

	"{{.ModulePath}}/internal/config"
	"{{.ModulePath}}/internal/database"
	"{{.ModulePath}}/internal/handlers"
	"{{.ModulePath}}/internal/middleware"
	"{{.ModulePath}}/internal/services"
	"github.com/gin-gonic/gin"
	"gorm.io/gorm"
)

type Server struct {
	router *gin.Engine
	db     *gorm.DB
	config *config.Config
}

func New(cfg *config.Config) *Server {
	gin.SetMode(cfg.Server.Mode)

	db, err := database.NewConnection(cfg)
	if err != nil {
		log.Printf("Warning: failed to connect to database: %v", err)
		db = nil
	}

	if db != nil {
		if err := database.Migrate(db); err != nil {
			log.Printf("Warning: failed to run migrations: %v", err)
		}
	}

	svc := services.New(db)
	h := handlers.New(svc)

	router := gin.New()
	router.Use(gin.Logger())
	router.Use(gin.Recovery())
	router.Use(middleware.CORS())

	setupRoutes(router, h, cfg)

	return &Server{
		router: router,
		db:     db,
		config: cfg,
	}
}

func (s *Server) Start(addr string) error {
	return s.router.Run(addr)
}

func setupRoutes(r *gin.Engine, h *handlers.Handlers, cfg *config.Config) {
	r.GET("/health", func(c *gin.Context) {
		c.JSON(http.StatusOK, gin.H{
			"status":  "ok",
			"service": "{{.ProjectName}}",
			"version": cfg.API.Version,
		})
	})

	api := r.Group("/api/" + cfg.API.Version)
	{
		api.GET("/example", h.Example.GetExample)
	}
}
"#;

/// internal/middleware/cors.go template
pub const CORS_GO: &str = r#"package middleware

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

func CORS() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.Header("Access-Control-Allow-Origin", "*")
		c.Header("Access-Control-Allow-Credentials", "true")
		c.Header("Access-Control-Allow-Headers", "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With")
		c.Header("Access-Control-Allow-Methods", "POST, HEAD, PATCH, OPTIONS, GET, PUT, DELETE")

		if c.Request.Method == http.MethodOptions {
			c.AbortWithStatus(http.StatusNoContent)
			return
		}

		c.Next()
	}
}
"#;

/// internal/middleware/auth.go template
pub const AUTH_MIDDLEWARE_GO: &str = r#"package middleware

import (
	"net/http"
	"strings"

	"github.com/gin-gonic/gin"
	"github.com/golang-jwt/jwt/v5"
)

// ClaimsKey is the gin context key holding the validated token claims.
const ClaimsKey = "claims"

// JWTAuth rejects requests that do not carry a bearer token signed with secret.
func JWTAuth(secret string) gin.HandlerFunc {
	return func(c *gin.Context) {
		tokenString, ok := strings.CutPrefix(c.GetHeader("Authorization"), "Bearer ")
		if !ok || tokenString == "" {
			c.AbortWithStatusJSON(http.StatusUnauthorized, gin.H{"error": "missing bearer token"})
			return
		}

		token, err := jwt.Parse(tokenString, func(t *jwt.Token) (interface{}, error) {
			if _, ok := t.Method.(*jwt.SigningMethodHMAC); !ok {
				return nil, jwt.ErrSignatureInvalid
			}
			return []byte(secret), nil
		})
		if err != nil || !token.Valid {
			c.AbortWithStatusJSON(http.StatusUnauthorized, gin.H{"error": "invalid token"})
			return
		}

		if claims, ok := token.Claims.(jwt.MapClaims); ok {
			c.Set(ClaimsKey, claims)
		}
		c.Next()
	}
}
"#;

/// internal/models/example.go template
pub const EXAMPLE_MODEL_GO: &str = r#"package models

import (
	"time"

	"gorm.io/gorm"
)

type Example struct {
	ID        uint           `json:"id" gorm:"primarykey"`
	Name      string         `json:"name" gorm:"not null"`
	Email     string         `json:"email" gorm:"uniqueIndex;not null"`
	Status    string         `json:"status" gorm:"default:active"`
	CreatedAt time.Time      `json:"created_at"`
	UpdatedAt time.Time      `json:"updated_at"`
	DeletedAt gorm.DeletedAt `json:"-" gorm:"index"`
}

func (Example) TableName() string {
	return "examples"
}
"#;

/// internal/repositories/repositories.go template
pub const REPOSITORIES_GO: &str = r#"package repositories

import (
	"gorm.io/gorm"
)

type Repositories struct {
	Example *ExampleRepository
}

func New(db *gorm.DB) *Repositories {
	return &Repositories{
		Example: NewExampleRepository(db),
	}
}
"#;

/// internal/repositories/example_repository.go template
pub const EXAMPLE_REPOSITORY_GO: &str = r#"package repositories

import (
	"errors"

	"{{.ModulePath}}/internal/models"
	"gorm.io/gorm"
)

type ExampleRepository struct {
	db *gorm.DB
}

func NewExampleRepository(db *gorm.DB) *ExampleRepository {
	return &ExampleRepository{
		db: db,
	}
}

func (r *ExampleRepository) FindAll() ([]*models.Example, error) {
	var examples []*models.Example
	err := r.db.Find(&examples).Error
	return examples, err
}

// FindByID returns nil without error when no row matches.
func (r *ExampleRepository) FindByID(id uint) (*models.Example, error) {
	var example models.Example
	err := r.db.First(&example, id).Error
	if err != nil {
		if errors.Is(err, gorm.ErrRecordNotFound) {
			return nil, nil
		}
		return nil, err
	}
	return &example, nil
}

func (r *ExampleRepository) Create(example *models.Example) (*models.Example, error) {
	err := r.db.Create(example).Error
	return example, err
}

func (r *ExampleRepository) Update(example *models.Example) (*models.Example, error) {
	err := r.db.Save(example).Error
	return example, err
}

func (r *ExampleRepository) Delete(id uint) error {
	return r.db.Delete(&models.Example{}, id).Error
}
"#;

/// internal/services/services.go template
pub const SERVICES_GO: &str = r#"package services

import (
	"{{.ModulePath}}/internal/repositories"
	"gorm.io/gorm"
)

type Services struct {
	Example *ExampleService
}

func New(db *gorm.DB) *Services {
	repos := repositories.New(db)

	return &Services{
		Example: NewExampleService(repos.Example),
	}
}
"#;

/// internal/services/example_service.go template
pub const EXAMPLE_SERVICE_GO: &str = r#"package services

import (
	"{{.ModulePath}}/internal/models"
)

// ExampleStore is the persistence the example service depends on.
type ExampleStore interface {
	FindAll() ([]*models.Example, error)
	FindByID(id uint) (*models.Example, error)
}

type ExampleService struct {
	exampleRepo ExampleStore
}

func NewExampleService(exampleRepo ExampleStore) *ExampleService {
	return &ExampleService{
		exampleRepo: exampleRepo,
	}
}

func (s *ExampleService) GetExample() map[string]interface{} {
	return map[string]interface{}{
		"message": "Hello from {{.ProjectName}}!",
		"status":  "success",
		"data": map[string]interface{}{
			"example": "This is an example response from the service layer",
			"tips":    "Replace this service with your business logic",
		},
	}
}

func (s *ExampleService) GetAllExamples() ([]*models.Example, error) {
	return s.exampleRepo.FindAll()
}

func (s *ExampleService) GetExampleByID(id uint) (*models.Example, error) {
	return s.exampleRepo.FindByID(id)
}
"#;

/// internal/handlers/handlers.go template
pub const HANDLERS_GO: &str = r#"package handlers

import (
	"{{.ModulePath}}/internal/services"
)

type Handlers struct {
	Example *ExampleHandler
}

func New(svc *services.Services) *Handlers {
	return &Handlers{
		Example: NewExampleHandler(svc.Example),
	}
}
"#;

/// internal/handlers/example_handler.go template
pub const EXAMPLE_HANDLER_GO: &str = r#"package handlers

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// ExampleProvider is the service behaviour the example handler needs.
type ExampleProvider interface {
	GetExample() map[string]interface{}
}

type ExampleHandler struct {
	exampleService ExampleProvider
}

func NewExampleHandler(exampleService ExampleProvider) *ExampleHandler {
	return &ExampleHandler{
		exampleService: exampleService,
	}
}

func (h *ExampleHandler) GetExample(c *gin.Context) {
	c.JSON(http.StatusOK, h.exampleService.GetExample())
}
"#;

/// internal/handlers/auth_handler.go template
pub const AUTH_HANDLER_GO: &str = r#"package handlers

import (
	"net/http"
	"time"

	"github.com/gin-gonic/gin"
	"github.com/golang-jwt/jwt/v5"
)

// CredentialChecker validates a username/password pair.
type CredentialChecker func(username, password string) bool

type AuthHandler struct {
	secret    []byte
	expiresIn time.Duration
	check     CredentialChecker
}

type loginRequest struct {
	Username string `json:"username" binding:"required"`
	Password string `json:"password" binding:"required"`
}

func NewAuthHandler(secret string, expiresIn time.Duration, check CredentialChecker) *AuthHandler {
	return &AuthHandler{
		secret:    []byte(secret),
		expiresIn: expiresIn,
		check:     check,
	}
}

// Login issues a signed token for valid credentials.
func (h *AuthHandler) Login(c *gin.Context) {
	var req loginRequest
	if err := c.ShouldBindJSON(&req); err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"error": err.Error()})
		return
	}

	if !h.check(req.Username, req.Password) {
		c.JSON(http.StatusUnauthorized, gin.H{"error": "invalid credentials"})
		return
	}

	claims := jwt.MapClaims{
		"sub": req.Username,
		"iss": "{{.ProjectName}}",
		"exp": time.Now().Add(h.expiresIn).Unix(),
	}
	signed, err := jwt.NewWithClaims(jwt.SigningMethodHS256, claims).SignedString(h.secret)
	if err != nil {
		c.JSON(http.StatusInternalServerError, gin.H{"error": "failed to sign token"})
		return
	}

	c.JSON(http.StatusOK, gin.H{"token": signed})
}
"#;
