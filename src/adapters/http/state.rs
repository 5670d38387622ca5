//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::clock::{FixedClock, SystemClock};
use crate::adapters::memory::{
    InMemoryProductPriceRepository, InMemoryProductRepository, InMemorySubscriptionStore,
    InMemoryUserRepository,
};
use crate::adapters::postgres::{
    PostgresProductPriceRepository, PostgresProductRepository, PostgresSubscriptionReader,
    PostgresSubscriptionRepository, PostgresUserRepository,
};
use crate::application::handlers::product::{
    CreateProductHandler, DeleteProductHandler, GetProductHandler, ListProductsHandler,
    UpdateProductHandler,
};
use crate::application::handlers::product_price::{
    CreateProductPriceHandler, DeleteProductPriceHandler, GetProductPriceHandler,
    ListProductPricesHandler, UpdateProductPriceHandler,
};
use crate::application::handlers::subscription::{
    GetSubscriptionHandler, ListActiveSubscriptionsHandler, SubscribeHandler, UnsubscribeHandler,
};
use crate::application::handlers::user::{
    CreateUserHandler, GetUserHandler, ListUsersHandler, UpdateUserHandler,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{
    Clock, ProductPriceRepository, ProductRepository, SubscriptionReader, SubscriptionRepository,
    UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is Arc-wrapped. Handlers are built
/// on demand from these ports.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub product_prices: Arc<dyn ProductPriceRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub subscription_reader: Arc<dyn SubscriptionReader>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by PostgreSQL and the system clock.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            products: Arc::new(PostgresProductRepository::new(pool.clone())),
            product_prices: Arc::new(PostgresProductPriceRepository::new(pool.clone())),
            subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
            subscription_reader: Arc::new(PostgresSubscriptionReader::new(pool)),
            clock: Arc::new(SystemClock),
        }
    }

    /// State backed entirely by in-memory adapters and the system clock.
    pub fn in_memory() -> Self {
        Self::in_memory_with_clock(Arc::new(SystemClock))
    }

    /// In-memory state with a caller-supplied clock.
    pub fn in_memory_with_clock(clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemorySubscriptionStore::new());
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            products: Arc::new(InMemoryProductRepository::new()),
            product_prices: Arc::new(InMemoryProductPriceRepository::new()),
            subscriptions: store.clone(),
            subscription_reader: store,
            clock,
        }
    }

    /// In-memory state frozen at `now`.
    pub fn in_memory_at(now: Timestamp) -> Self {
        Self::in_memory_with_clock(Arc::new(FixedClock::new(now)))
    }

    // Users

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone())
    }

    pub fn update_user_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    // Products

    pub fn create_product_handler(&self) -> CreateProductHandler {
        CreateProductHandler::new(self.products.clone(), self.product_prices.clone())
    }

    pub fn update_product_handler(&self) -> UpdateProductHandler {
        UpdateProductHandler::new(self.products.clone(), self.product_prices.clone())
    }

    pub fn delete_product_handler(&self) -> DeleteProductHandler {
        DeleteProductHandler::new(
            self.products.clone(),
            self.product_prices.clone(),
            self.subscriptions.clone(),
        )
    }

    pub fn get_product_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.products.clone(), self.product_prices.clone())
    }

    pub fn list_products_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.products.clone(), self.product_prices.clone())
    }

    // Product prices

    pub fn create_product_price_handler(&self) -> CreateProductPriceHandler {
        CreateProductPriceHandler::new(self.products.clone(), self.product_prices.clone())
    }

    pub fn update_product_price_handler(&self) -> UpdateProductPriceHandler {
        UpdateProductPriceHandler::new(self.product_prices.clone())
    }

    pub fn delete_product_price_handler(&self) -> DeleteProductPriceHandler {
        DeleteProductPriceHandler::new(self.product_prices.clone(), self.subscriptions.clone())
    }

    pub fn get_product_price_handler(&self) -> GetProductPriceHandler {
        GetProductPriceHandler::new(self.product_prices.clone())
    }

    pub fn list_product_prices_handler(&self) -> ListProductPricesHandler {
        ListProductPricesHandler::new(self.products.clone(), self.product_prices.clone())
    }

    // Subscriptions

    pub fn subscribe_handler(&self) -> SubscribeHandler {
        SubscribeHandler::new(
            self.users.clone(),
            self.product_prices.clone(),
            self.subscriptions.clone(),
            self.subscription_reader.clone(),
            self.clock.clone(),
        )
    }

    pub fn unsubscribe_handler(&self) -> UnsubscribeHandler {
        UnsubscribeHandler::new(
            self.users.clone(),
            self.product_prices.clone(),
            self.subscriptions.clone(),
            self.clock.clone(),
        )
    }

    pub fn list_active_subscriptions_handler(&self) -> ListActiveSubscriptionsHandler {
        ListActiveSubscriptionsHandler::new(
            self.users.clone(),
            self.product_prices.clone(),
            self.subscription_reader.clone(),
            self.clock.clone(),
        )
    }

    pub fn get_subscription_handler(&self) -> GetSubscriptionHandler {
        GetSubscriptionHandler::new(
            self.users.clone(),
            self.product_prices.clone(),
            self.subscriptions.clone(),
        )
    }
}
