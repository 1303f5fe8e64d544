//! 单个会话的状态所有者
//!
//! 目录、购物车、登录状态和结账流程都归 `Session` 所有，
//! 需要它们的操作通过参数拿到引用，没有全局可变状态。

use tracing::info;

use crate::app::auth::model::{LoginRequest, RegisterRequest, User};
use crate::app::auth::service::AuthService;
use crate::app::cart::service::CartStore;
use crate::app::catalog::model::ProductId;
use crate::app::catalog::service::CatalogService;
use crate::app::checkout::model::{Order, PaymentInfo, ShippingInfo};
use crate::app::checkout::service::CheckoutFlow;
use crate::core::error::{Result, StoreError};
use crate::core::service::ProductLookup;
use crate::infrastructure::config::StoreConfig;

#[derive(Debug, Clone)]
pub struct Session {
    config: StoreConfig,
    catalog: CatalogService,
    cart: CartStore,
    auth: AuthService,
    checkout: CheckoutFlow,
}

impl Session {
    pub fn new(config: StoreConfig, catalog: CatalogService) -> Self {
        let auth = AuthService::new(config.mock.auth_delay());
        let checkout = CheckoutFlow::new(
            config.pricing.clone(),
            config.checkout.clone(),
            config.mock.checkout_delay(),
        );
        info!(store = %config.store.name, "会话开始");
        Self {
            config,
            catalog,
            cart: CartStore::new(),
            auth,
            checkout,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.user()
    }

    /// 按 ID 查找商品并加入购物车
    pub fn add_to_cart_by_id(&mut self, product_id: ProductId, quantity: u32) -> Result<()> {
        let product = self
            .catalog
            .lookup_product(product_id)
            .ok_or(StoreError::ProductNotFound(product_id))?;
        self.cart.add_quantity(product, quantity);
        Ok(())
    }

    pub async fn login(&mut self, request: LoginRequest) -> &User {
        self.auth.login(request).await
    }

    pub async fn register(&mut self, request: RegisterRequest) -> Result<&User> {
        self.auth.register(request).await
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }

    pub fn begin_checkout(&mut self) -> Result<()> {
        self.checkout.begin(&self.auth, &self.cart)
    }

    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<()> {
        self.checkout.submit_shipping(info)
    }

    pub async fn place_order(&mut self, payment: PaymentInfo) -> Result<&Order> {
        self.checkout
            .submit_payment(payment, &self.auth, &mut self.cart)
            .await
    }

    pub fn close_checkout(&mut self) {
        self.checkout.close();
    }
}
