//! PlaceOrderHandler - Command handler for placing an order.
//!
//! Steps run strictly in sequence and a failure aborts the rest:
//!
//! 1. optional stock check (`InventoryError` when stock is short)
//! 2. stock decrement by the ordered quantity
//! 3. order persistence under a fresh id
//!
//! A decrement that succeeded is not compensated when persistence fails.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::application::response::{ServiceResult, ServiceSuccess};
use crate::application::use_case::UseCase;
use crate::config::OrderConfig;
use crate::domain::foundation::{DomainError, OrderId, ProductId};
use crate::domain::order::{Order, OrderItem, PlacementStage, Quantity};
use crate::ports::{InventoryRepository, OrderRepository};

/// Switches applied to every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPolicy {
    /// Read stock and reject short orders before decrementing.
    pub validate_stock: bool,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            validate_stock: true,
        }
    }
}

impl From<&OrderConfig> for PlacementPolicy {
    fn from(config: &OrderConfig) -> Self {
        Self {
            validate_stock: config.validate_stock,
        }
    }
}

/// Command to place an order for a single product.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    pub product_id: ProductId,
    pub quantity: Quantity,
    /// Correlation id assigned to the HTTP request, if any.
    pub request_id: Option<String>,
}

/// Result of a successful placement: `{ "orderId": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResult {
    pub order_id: OrderId,
}

/// JSON body of `POST /orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderBody {
    pub product_id: String,
    pub quantity: u32,
}

/// Request-scoped values written by middleware.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLocals {
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Request record: `{ body: { productId, quantity }, locals? }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    pub body: PlaceOrderBody,
    #[serde(default)]
    pub locals: RequestLocals,
}

impl TryFrom<PlaceOrderRequest> for PlaceOrderCommand {
    type Error = DomainError;

    fn try_from(request: PlaceOrderRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: ProductId::new(request.body.product_id)?,
            quantity: Quantity::new(request.body.quantity)?,
            request_id: request.locals.request_id,
        })
    }
}

/// Handler for placing orders.
pub struct PlaceOrderHandler {
    inventory: Arc<dyn InventoryRepository>,
    orders: Arc<dyn OrderRepository>,
    policy: PlacementPolicy,
}

impl PlaceOrderHandler {
    pub fn new(
        inventory: Arc<dyn InventoryRepository>,
        orders: Arc<dyn OrderRepository>,
        policy: PlacementPolicy,
    ) -> Self {
        Self {
            inventory,
            orders,
            policy,
        }
    }

    pub async fn handle(&self, cmd: PlaceOrderCommand) -> ServiceResult<PlaceOrderResult> {
        let mut tracker = StageTracker::new(&cmd.product_id, cmd.request_id.as_deref());

        match self.run(&cmd, &mut tracker).await {
            Ok(order_id) => {
                tracker.advance();
                Ok(ServiceSuccess::created(
                    "Order placed",
                    PlaceOrderResult { order_id },
                ))
            }
            Err(error) => {
                tracker.fail(&error);
                Err(error)
            }
        }
    }

    async fn run(
        &self,
        cmd: &PlaceOrderCommand,
        tracker: &mut StageTracker<'_>,
    ) -> Result<OrderId, DomainError> {
        // 1. Validate stock
        if self.policy.validate_stock {
            let stock = self.inventory.get_stock(&cmd.product_id).await?;
            if !cmd.quantity.is_covered_by(stock) {
                return Err(DomainError::inventory(format!(
                    "Insufficient stock for {}",
                    cmd.product_id
                )));
            }
        }
        tracker.advance();

        // 2. Decrement stock
        self.inventory
            .update_stock(&cmd.product_id, cmd.quantity.as_decrement())
            .await?;
        tracker.advance();

        // 3. Persist order
        let order = Order::place(OrderItem {
            product_id: cmd.product_id.clone(),
            quantity: cmd.quantity,
        });
        self.orders.save_order(&order).await
    }
}

/// Follows one placement through its stages and logs every transition.
struct StageTracker<'a> {
    product_id: &'a ProductId,
    request_id: Option<&'a str>,
    stage: PlacementStage,
}

impl<'a> StageTracker<'a> {
    fn new(product_id: &'a ProductId, request_id: Option<&'a str>) -> Self {
        debug!(
            product_id = %product_id,
            request_id,
            stage = ?PlacementStage::Validating,
            "Order placement started"
        );
        Self {
            product_id,
            request_id,
            stage: PlacementStage::Validating,
        }
    }

    fn advance(&mut self) {
        self.move_to(self.stage.advance());
    }

    fn fail(&mut self, error: &DomainError) {
        self.move_to(self.stage.fail(error.tag()));
    }

    fn move_to(&mut self, next: PlacementStage) {
        if self.stage.can_transition_to(&next) {
            debug!(
                product_id = %self.product_id,
                request_id = self.request_id,
                from = ?self.stage,
                to = ?next,
                "Order placement stage changed"
            );
            self.stage = next;
        }
    }
}

impl FromContext for PlaceOrderHandler {
    fn from_context(context: &DependencyContext) -> Result<Self, ContextError> {
        let policy = context
            .get::<PlacementPolicy>()
            .map(|policy| *policy)
            .unwrap_or_default();

        Ok(Self::new(
            context.resolve::<dyn InventoryRepository>()?,
            context.resolve::<dyn OrderRepository>()?,
            policy,
        ))
    }
}

#[async_trait]
impl UseCase for PlaceOrderHandler {
    type Input = PlaceOrderRequest;
    type Output = PlaceOrderResult;

    const NAME: &'static str = "place_order";

    async fn execute(&self, input: Self::Input) -> ServiceResult<Self::Output> {
        self.handle(PlaceOrderCommand::try_from(input)?).await
    }
}
