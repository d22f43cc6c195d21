//! Domain models and API DTOs.
//!
//! Entity structs mirror their SQLite tables (all timestamps are UTC Unix
//! milliseconds, money is integer cents). Response types carry the
//! float-facing shapes the HTTP API exposes.

pub mod category;
pub mod customer;
pub mod order;
pub mod payment_method;
pub mod product;
pub mod report;
pub mod user;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use order::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemResponse, OrderResponse, OrderStatus,
    OrderStatusUpdate,
};
pub use payment_method::{PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate};
pub use product::{Product, ProductCreate, ProductResponse, ProductUpdate};
pub use report::{
    DailyRevenueEntry, MonthlyRevenueEntry, OrderHistoryEntry, OverviewReport, ProductRevenueEntry,
};
pub use user::{User, UserCreate, UserInfo, UserRole};
