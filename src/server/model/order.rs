//! Order domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::{
        api::SUCCESS_MESSAGE,
        order::{CreateOrderDto, OrderDto, OrderListDto, OrderResponseDto, UpdateOrderDto},
    },
    server::{
        error::validation::ValidationError,
        model::list::Page,
        util::parse::{optional_text, parse_car_id, parse_date, parse_optional_date, require_text},
    },
};

/// A rental order with the booked car's name denormalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: i32,
    pub car_id: i32,
    pub car_name: String,
    pub order_date: NaiveDate,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub pickup_location: String,
    pub dropoff_location: String,
}

impl Order {
    /// Converts an order entity and its joined car to a domain model.
    ///
    /// A missing car yields an empty `car_name`; nullable locations become empty strings.
    pub fn from_entity(entity: entity::order::Model, car: Option<entity::car::Model>) -> Self {
        Self {
            order_id: entity.order_id,
            car_id: entity.car_id,
            car_name: car
                .map(|c| c.car_name.trim().to_string())
                .unwrap_or_default(),
            order_date: entity.order_date,
            pickup_date: entity.pickup_date,
            dropoff_date: entity.dropoff_date,
            pickup_location: entity.pickup_location.unwrap_or_default().trim().to_string(),
            dropoff_location: entity.dropoff_location.unwrap_or_default().trim().to_string(),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            order_id: self.order_id,
            car_id: self.car_id,
            car_name: self.car_name,
            order_date: self.order_date,
            pickup_date: self.pickup_date,
            dropoff_date: self.dropoff_date,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
        }
    }

    pub fn into_response_dto(self) -> OrderResponseDto {
        OrderResponseDto {
            message: SUCCESS_MESSAGE.to_string(),
            item: self.into_dto(),
        }
    }
}

impl Page<Order> {
    pub fn into_dto(self) -> OrderListDto {
        OrderListDto {
            page: self.page,
            limit: self.limit,
            total: self.total,
            order: self.order.as_str().to_string(),
            order_by: self.order_by,
            items: self.items.into_iter().map(Order::into_dto).collect(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Validated parameters for creating an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    pub car_id: i32,
    pub order_date: NaiveDate,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub pickup_location: String,
    pub dropoff_location: String,
}

impl CreateOrderParams {
    /// Validates a create request, checking fields in wire order.
    ///
    /// Dropoff before pickup is accepted as-is.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - All fields present and well-formed
    /// - `Err(ValidationError)` - First failing field, e.g. `missing-car-id`,
    ///   `wrong-car-id-type` or `failed-parsing-pickup-date`
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, ValidationError> {
        let car_id = dto
            .car_id
            .as_ref()
            .ok_or(ValidationError::Missing("car-id"))
            .and_then(parse_car_id)?;

        Ok(Self {
            car_id,
            order_date: parse_date(&dto.order_date, "order-date")?,
            pickup_date: parse_date(&dto.pickup_date, "pickup-date")?,
            dropoff_date: parse_date(&dto.dropoff_date, "dropoff-date")?,
            pickup_location: require_text(&dto.pickup_location, "pickup-location")?,
            dropoff_location: require_text(&dto.dropoff_location, "dropoff-location")?,
        })
    }
}

/// Sparse update for an order; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOrderParams {
    pub car_id: Option<i32>,
    pub order_date: Option<NaiveDate>,
    pub pickup_date: Option<NaiveDate>,
    pub dropoff_date: Option<NaiveDate>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
}

impl UpdateOrderParams {
    /// Keeps only supplied fields, validating each one as on create.
    pub fn from_dto(dto: UpdateOrderDto) -> Result<Self, ValidationError> {
        let car_id = match dto.car_id.as_ref() {
            None => None,
            Some(raw) => match parse_car_id(raw) {
                Ok(id) => Some(id),
                Err(ValidationError::Missing(_)) => None,
                Err(err) => return Err(err),
            },
        };

        Ok(Self {
            car_id,
            order_date: parse_optional_date(&dto.order_date, "order-date")?,
            pickup_date: parse_optional_date(&dto.pickup_date, "pickup-date")?,
            dropoff_date: parse_optional_date(&dto.dropoff_date, "dropoff-date")?,
            pickup_location: optional_text(&dto.pickup_location),
            dropoff_location: optional_text(&dto.dropoff_location),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.car_id.is_none()
            && self.order_date.is_none()
            && self.pickup_date.is_none()
            && self.dropoff_date.is_none()
            && self.pickup_location.is_none()
            && self.dropoff_location.is_none()
    }
}
