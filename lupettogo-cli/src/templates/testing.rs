//! Go test files, generated only when tests are enabled

use super::TemplateEntry;

pub(super) const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::project("internal/handlers/example_handler_test.go", EXAMPLE_HANDLER_TEST_GO),
    TemplateEntry::project("internal/services/example_service_test.go", EXAMPLE_SERVICE_TEST_GO),
    TemplateEntry::project(
        "internal/repositories/example_repository_test.go",
        EXAMPLE_REPOSITORY_TEST_GO,
    ),
    TemplateEntry::project("internal/middleware/auth_test.go", AUTH_MIDDLEWARE_TEST_GO),
];

/// internal/handlers/example_handler_test.go template
pub const EXAMPLE_HANDLER_TEST_GO: &str = r#"package handlers

import (
	"encoding/json"
	"net/http"
	"net/http/httptest"
	"testing"

	"github.com/gin-gonic/gin"
	"github.com/stretchr/testify/assert"
	"github.com/stretchr/testify/mock"
)

type MockExampleService struct {
	mock.Mock
}

func (m *MockExampleService) GetExample() map[string]interface{} {
	args := m.Called()
	return args.Get(0).(map[string]interface{})
}

func TestExampleHandler_GetExample(t *testing.T) {
	gin.SetMode(gin.TestMode)

	mockService := new(MockExampleService)
	expected := map[string]interface{}{
		"message": "Hello from {{.ProjectName}}!",
		"status":  "success",
	}
	mockService.On("GetExample").Return(expected)

	handler := NewExampleHandler(mockService)

	router := gin.New()
	router.GET("/example", handler.GetExample)

	req, _ := http.NewRequest(http.MethodGet, "/example", nil)
	w := httptest.NewRecorder()
	router.ServeHTTP(w, req)

	assert.Equal(t, http.StatusOK, w.Code)

	var response map[string]interface{}
	err := json.Unmarshal(w.Body.Bytes(), &response)
	assert.NoError(t, err)
	assert.Equal(t, expected["message"], response["message"])
	assert.Equal(t, expected["status"], response["status"])

	mockService.AssertExpectations(t)
}
"#;

/// internal/services/example_service_test.go template
pub const EXAMPLE_SERVICE_TEST_GO: &str = r#"package services

import (
	"testing"

	"{{.ModulePath}}/internal/models"
	"github.com/stretchr/testify/assert"
	"github.com/stretchr/testify/mock"
)

type MockExampleStore struct {
	mock.Mock
}

func (m *MockExampleStore) FindAll() ([]*models.Example, error) {
	args := m.Called()
	return args.Get(0).([]*models.Example), args.Error(1)
}

func (m *MockExampleStore) FindByID(id uint) (*models.Example, error) {
	args := m.Called(id)
	return args.Get(0).(*models.Example), args.Error(1)
}

func TestExampleService_GetExample(t *testing.T) {
	service := NewExampleService(new(MockExampleStore))

	result := service.GetExample()

	assert.NotNil(t, result)
	assert.Equal(t, "Hello from {{.ProjectName}}!", result["message"])
	assert.Equal(t, "success", result["status"])
}

func TestExampleService_GetAllExamples(t *testing.T) {
	mockRepo := new(MockExampleStore)
	expected := []*models.Example{
		&models.Example{ID: 1, Name: "Test 1", Email: "test1@example.com"},
		&models.Example{ID: 2, Name: "Test 2", Email: "test2@example.com"},
	}
	mockRepo.On("FindAll").Return(expected, nil)

	service := NewExampleService(mockRepo)
	result, err := service.GetAllExamples()

	assert.NoError(t, err)
	assert.Equal(t, expected, result)
	mockRepo.AssertExpectations(t)
}
"#;

/// internal/repositories/example_repository_test.go template
pub const EXAMPLE_REPOSITORY_TEST_GO: &str = r#"package repositories

import (
	"testing"

	"{{.ModulePath}}/internal/models"
	"github.com/glebarez/sqlite"
	"github.com/stretchr/testify/assert"
	"github.com/stretchr/testify/require"
	"gorm.io/gorm"
)

func newTestDB(t *testing.T) *gorm.DB {
	t.Helper()
	db, err := gorm.Open(sqlite.Open("file::memory:"), &gorm.Config{})
	require.NoError(t, err)
	require.NoError(t, db.AutoMigrate(&models.Example{}))
	return db
}

func TestExampleRepository_CreateAndFind(t *testing.T) {
	repo := NewExampleRepository(newTestDB(t))

	created, err := repo.Create(&models.Example{Name: "Test", Email: "test@example.com"})
	require.NoError(t, err)
	assert.NotZero(t, created.ID)

	found, err := repo.FindByID(created.ID)
	require.NoError(t, err)
	assert.Equal(t, "test@example.com", found.Email)
}

func TestExampleRepository_FindByIDMissing(t *testing.T) {
	repo := NewExampleRepository(newTestDB(t))

	found, err := repo.FindByID(42)
	assert.NoError(t, err)
	assert.Nil(t, found)
}
"#;

/// internal/middleware/auth_test.go template
pub const AUTH_MIDDLEWARE_TEST_GO: &str = r#"package middleware

import (
	"net/http"
	"net/http/httptest"
	"testing"

	"github.com/gin-gonic/gin"
	"github.com/golang-jwt/jwt/v5"
	"github.com/stretchr/testify/assert"
)

func newAuthRouter(secret string) *gin.Engine {
	gin.SetMode(gin.TestMode)
	r := gin.New()
	r.GET("/private", JWTAuth(secret), func(c *gin.Context) {
		c.Status(http.StatusOK)
	})
	return r
}

func TestJWTAuth_MissingToken(t *testing.T) {
	w := httptest.NewRecorder()
	req, _ := http.NewRequest(http.MethodGet, "/private", nil)
	newAuthRouter("secret").ServeHTTP(w, req)

	assert.Equal(t, http.StatusUnauthorized, w.Code)
}

func TestJWTAuth_ValidToken(t *testing.T) {
	signed, err := jwt.NewWithClaims(jwt.SigningMethodHS256, jwt.MapClaims{"sub": "tester"}).SignedString([]byte("secret"))
	assert.NoError(t, err)

	w := httptest.NewRecorder()
	req, _ := http.NewRequest(http.MethodGet, "/private", nil)
	req.Header.Set("Authorization", "Bearer "+signed)
	newAuthRouter("secret").ServeHTTP(w, req)

	assert.Equal(t, http.StatusOK, w.Code)
}
"#;
