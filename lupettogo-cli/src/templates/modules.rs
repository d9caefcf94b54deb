//! Module quartet templates, rendered by `generate module`
//!
//! These bodies use the literal grammar: `__module__`, `__Module__` and
//! `__project__` are replaced verbatim. Custom templates may also write the
//! project path as `{{.ProjectName}}`.

use super::{ModuleRole, TemplateEntry};

pub(super) const ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::module(ModuleRole::Model, "modules/model.go.tmpl", MODEL_GO),
    TemplateEntry::module(ModuleRole::Repository, "modules/repository.go.tmpl", REPOSITORY_GO),
    TemplateEntry::module(ModuleRole::Service, "modules/service.go.tmpl", SERVICE_GO),
    TemplateEntry::module(ModuleRole::Handler, "modules/handler.go.tmpl", HANDLER_GO),
];

/// Model template
pub const MODEL_GO: &str = r#"package models

import (
	"time"

	"gorm.io/gorm"
)

type __Module__ struct {
	ID        uint           `json:"id" gorm:"primarykey"`
	Name      string         `json:"name" gorm:"not null" validate:"required"`
	Status    string         `json:"status" gorm:"default:active"`
	CreatedAt time.Time      `json:"created_at"`
	UpdatedAt time.Time      `json:"updated_at"`
	DeletedAt gorm.DeletedAt `json:"-" gorm:"index"`
}

func (__Module__) TableName() string {
	return "__module__s"
}
"#;

/// Repository template
pub const REPOSITORY_GO: &str = r#"package repositories

import (
	"errors"

	"__project__/internal/models"
	"gorm.io/gorm"
)

type __Module__Repository struct {
	db *gorm.DB
}

func New__Module__Repository(db *gorm.DB) *__Module__Repository {
	return &__Module__Repository{
		db: db,
	}
}

func (r *__Module__Repository) FindAll() ([]*models.__Module__, error) {
	var __module__s []*models.__Module__
	err := r.db.Find(&__module__s).Error
	return __module__s, err
}

// FindByID returns nil without error when no row matches.
func (r *__Module__Repository) FindByID(id uint) (*models.__Module__, error) {
	var __module__ models.__Module__
	err := r.db.First(&__module__, id).Error
	if err != nil {
		if errors.Is(err, gorm.ErrRecordNotFound) {
			return nil, nil
		}
		return nil, err
	}
	return &__module__, nil
}

func (r *__Module__Repository) Create(__module__ *models.__Module__) (*models.__Module__, error) {
	err := r.db.Create(__module__).Error
	return __module__, err
}

func (r *__Module__Repository) Update(__module__ *models.__Module__) (*models.__Module__, error) {
	err := r.db.Save(__module__).Error
	return __module__, err
}

func (r *__Module__Repository) Delete(id uint) error {
	return r.db.Delete(&models.__Module__{}, id).Error
}

func (r *__Module__Repository) FindByField(field string, value interface{}) ([]*models.__Module__, error) {
	var __module__s []*models.__Module__
	err := r.db.Where(field+" = ?", value).Find(&__module__s).Error
	return __module__s, err
}
"#;

/// Service template
pub const SERVICE_GO: &str = r#"package services

import (
	"errors"

	"__project__/internal/models"
	"__project__/internal/repositories"
)

// Err__Module__NotFound is returned when the requested __module__ does not exist.
var Err__Module__NotFound = errors.New("__module__ not found")

type __Module__Service struct {
	__module__Repo *repositories.__Module__Repository
}

func New__Module__Service(__module__Repo *repositories.__Module__Repository) *__Module__Service {
	return &__Module__Service{
		__module__Repo: __module__Repo,
	}
}

func (s *__Module__Service) GetAll__Module__s() ([]*models.__Module__, error) {
	return s.__module__Repo.FindAll()
}

func (s *__Module__Service) Get__Module__ByID(id uint) (*models.__Module__, error) {
	__module__, err := s.__module__Repo.FindByID(id)
	if err != nil {
		return nil, err
	}
	if __module__ == nil {
		return nil, Err__Module__NotFound
	}
	return __module__, nil
}

func (s *__Module__Service) Create__Module__(__module__ *models.__Module__) (*models.__Module__, error) {
	if err := s.validate__Module__(__module__); err != nil {
		return nil, err
	}

	return s.__module__Repo.Create(__module__)
}

func (s *__Module__Service) Update__Module__(__module__ *models.__Module__) (*models.__Module__, error) {
	if _, err := s.Get__Module__ByID(__module__.ID); err != nil {
		return nil, err
	}

	if err := s.validate__Module__(__module__); err != nil {
		return nil, err
	}

	return s.__module__Repo.Update(__module__)
}

func (s *__Module__Service) Delete__Module__(id uint) error {
	if _, err := s.Get__Module__ByID(id); err != nil {
		return err
	}

	return s.__module__Repo.Delete(id)
}

// validate__Module__ holds business rules applied before writes.
func (s *__Module__Service) validate__Module__(__module__ *models.__Module__) error {
	if __module__.Name == "" {
		return errors.New("name is required")
	}
	return nil
}
"#;

/// Handler template
pub const HANDLER_GO: &str = r#"package handlers

import (
	"errors"
	"net/http"
	"strconv"

	"__project__/internal/models"
	"__project__/internal/services"
	"github.com/gin-gonic/gin"
)

type __Module__Handler struct {
	__module__Service *services.__Module__Service
}

func New__Module__Handler(__module__Service *services.__Module__Service) *__Module__Handler {
	return &__Module__Handler{
		__module__Service: __module__Service,
	}
}

// Register mounts the __module__ routes on a router group.
func (h *__Module__Handler) Register(rg *gin.RouterGroup) {
	rg.GET("/__module__s", h.Get__Module__s)
	rg.GET("/__module__s/:id", h.Get__Module__)
	rg.POST("/__module__s", h.Create__Module__)
	rg.PUT("/__module__s/:id", h.Update__Module__)
	rg.DELETE("/__module__s/:id", h.Delete__Module__)
}

// Get__Module__s godoc
// @Summary Get all __module__s
// @Tags __module__s
// @Produce json
// @Success 200 {array} models.__Module__
// @Router /__module__s [get]
func (h *__Module__Handler) Get__Module__s(c *gin.Context) {
	__module__s, err := h.__module__Service.GetAll__Module__s()
	if err != nil {
		c.JSON(http.StatusInternalServerError, gin.H{"error": err.Error()})
		return
	}
	c.JSON(http.StatusOK, __module__s)
}

// Get__Module__ godoc
// @Summary Get a __module__ by ID
// @Tags __module__s
// @Produce json
// @Param id path int true "__Module__ ID"
// @Success 200 {object} models.__Module__
// @Failure 404 {object} map[string]string
// @Router /__module__s/{id} [get]
func (h *__Module__Handler) Get__Module__(c *gin.Context) {
	id, ok := parse__Module__ID(c)
	if !ok {
		return
	}

	__module__, err := h.__module__Service.Get__Module__ByID(id)
	if err != nil {
		respond__Module__Error(c, err)
		return
	}

	c.JSON(http.StatusOK, __module__)
}

// Create__Module__ godoc
// @Summary Create a new __module__
// @Tags __module__s
// @Accept json
// @Produce json
// @Param __module__ body models.__Module__ true "__Module__ object"
// @Success 201 {object} models.__Module__
// @Failure 400 {object} map[string]string
// @Router /__module__s [post]
func (h *__Module__Handler) Create__Module__(c *gin.Context) {
	var __module__ models.__Module__
	if err := c.ShouldBindJSON(&__module__); err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"error": err.Error()})
		return
	}

	created, err := h.__module__Service.Create__Module__(&__module__)
	if err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"error": err.Error()})
		return
	}

	c.JSON(http.StatusCreated, created)
}

// Update__Module__ godoc
// @Summary Update a __module__
// @Tags __module__s
// @Accept json
// @Produce json
// @Param id path int true "__Module__ ID"
// @Param __module__ body models.__Module__ true "__Module__ object"
// @Success 200 {object} models.__Module__
// @Failure 400 {object} map[string]string
// @Failure 404 {object} map[string]string
// @Router /__module__s/{id} [put]
func (h *__Module__Handler) Update__Module__(c *gin.Context) {
	id, ok := parse__Module__ID(c)
	if !ok {
		return
	}

	var __module__ models.__Module__
	if err := c.ShouldBindJSON(&__module__); err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"error": err.Error()})
		return
	}

	__module__.ID = id
	updated, err := h.__module__Service.Update__Module__(&__module__)
	if err != nil {
		respond__Module__Error(c, err)
		return
	}

	c.JSON(http.StatusOK, updated)
}

// Delete__Module__ godoc
// @Summary Delete a __module__
// @Tags __module__s
// @Param id path int true "__Module__ ID"
// @Success 204
// @Failure 404 {object} map[string]string
// @Router /__module__s/{id} [delete]
func (h *__Module__Handler) Delete__Module__(c *gin.Context) {
	id, ok := parse__Module__ID(c)
	if !ok {
		return
	}

	if err := h.__module__Service.Delete__Module__(id); err != nil {
		respond__Module__Error(c, err)
		return
	}

	c.Status(http.StatusNoContent)
}

func parse__Module__ID(c *gin.Context) (uint, bool) {
	id, err := strconv.ParseUint(c.Param("id"), 10, 32)
	if err != nil {
		c.JSON(http.StatusBadRequest, gin.H{"error": "Invalid ID format"})
		return 0, false
	}
	return uint(id), true
}

func respond__Module__Error(c *gin.Context, err error) {
	if errors.Is(err, services.Err__Module__NotFound) {
		c.JSON(http.StatusNotFound, gin.H{"error": err.Error()})
		return
	}
	c.JSON(http.StatusInternalServerError, gin.H{"error": err.Error()})
}
"#;
