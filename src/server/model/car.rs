//! Car domain models and parameters.

use crate::{
    model::{
        api::SUCCESS_MESSAGE,
        car::{CarDto, CarListDto, CarResponseDto, CreateCarDto, UpdateCarDto},
    },
    server::{
        error::validation::ValidationError,
        model::list::Page,
        util::parse::{optional_text, require_text},
    },
};

/// A car listing as returned to clients.
///
/// Nullable columns are coerced to empty strings and text is trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub car_id: i32,
    pub car_name: String,
    pub day_rate: f64,
    pub month_rate: f64,
    pub image: String,
}

impl Car {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            car_id: entity.car_id,
            car_name: entity.car_name.trim().to_string(),
            day_rate: entity.day_rate,
            month_rate: entity.month_rate,
            image: entity.image.unwrap_or_default().trim().to_string(),
        }
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            car_id: self.car_id,
            car_name: self.car_name,
            day_rate: self.day_rate,
            month_rate: self.month_rate,
            image: self.image,
        }
    }

    pub fn into_response_dto(self) -> CarResponseDto {
        CarResponseDto {
            message: SUCCESS_MESSAGE.to_string(),
            item: self.into_dto(),
        }
    }
}

impl Page<Car> {
    pub fn into_dto(self) -> CarListDto {
        CarListDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            order: self.order.as_str().to_string(),
            order_by: self.order_by,
            items: self.items.into_iter().map(Car::into_dto).collect(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Validated parameters for creating a car.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCarParams {
    pub car_name: String,
    pub day_rate: f64,
    pub month_rate: f64,
    pub image: String,
}

impl CreateCarParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateCarParams)` - All fields present with non-negative rates
    /// - `Err(ValidationError::Missing)` - Blank name or image, or a zero rate
    /// - `Err(ValidationError::Invalid)` - Negative rate
    pub fn from_dto(dto: CreateCarDto) -> Result<Self, ValidationError> {
        let car_name = require_text(&dto.car_name, "car-name")?;
        let day_rate = require_rate(dto.day_rate, "day-rate")?;
        let month_rate = require_rate(dto.month_rate, "month-rate")?;
        let image = require_text(&dto.image, "image")?;

        Ok(Self {
            car_name,
            day_rate,
            month_rate,
            image,
        })
    }
}

/// Sparse update for a car; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCarParams {
    pub car_name: Option<String>,
    pub day_rate: Option<f64>,
    pub month_rate: Option<f64>,
    pub image: Option<String>,
}

impl UpdateCarParams {
    /// Keeps only supplied fields.
    ///
    /// A zero rate is indistinguishable from an omitted one and is skipped.
    pub fn from_dto(dto: UpdateCarDto) -> Result<Self, ValidationError> {
        Ok(Self {
            car_name: optional_text(&dto.car_name),
            day_rate: optional_rate(dto.day_rate, "day-rate")?,
            month_rate: optional_rate(dto.month_rate, "month-rate")?,
            image: optional_text(&dto.image),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.car_name.is_none()
            && self.day_rate.is_none()
            && self.month_rate.is_none()
            && self.image.is_none()
    }
}

fn require_rate(rate: f64, field: &'static str) -> Result<f64, ValidationError> {
    optional_rate(rate, field)?.ok_or(ValidationError::Missing(field))
}

fn optional_rate(rate: f64, field: &'static str) -> Result<Option<f64>, ValidationError> {
    if rate == 0.0 {
        return Ok(None);
    }
    if rate < 0.0 || !rate.is_finite() {
        return Err(ValidationError::Invalid(field));
    }

    Ok(Some(rate))
}
