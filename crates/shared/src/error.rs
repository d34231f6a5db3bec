//! 统一错误处理模块
//!
//! 定义模拟市场服务共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 所有访问器统一返回 `Result<T>`，"未找到" 不再以空值表达。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// 订阅不可用时的固定提示，调用方依赖该文本
pub const OFFER_NOT_AVAILABLE_MESSAGE: &str = "Offer not available for subscription.";

/// 系统错误类型
#[derive(Debug, Error)]
pub enum MarketError {
    // ==================== 资源错误 ====================
    #[error("记录未找到: {entity} id={id}")]
    NotFound { entity: String, id: String },

    // ==================== 业务逻辑错误 ====================
    #[error("Offer not available for subscription.")]
    OfferNotAvailable { offer_id: String },

    // ==================== 验证错误 ====================
    #[error("参数验证失败: {0}")]
    Validation(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, MarketError>;

impl MarketError {
    /// 构造未找到错误
    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::OfferNotAvailable { .. } => "OFFER_NOT_AVAILABLE",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::OfferNotAvailable { .. } => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// 是否为"未找到"类错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<validator::ValidationErrors> for MarketError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "code": self.code(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
