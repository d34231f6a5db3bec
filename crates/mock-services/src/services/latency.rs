//! 人工延迟
//!
//! 模拟网络往返：每次调用在配置区间内随机休眠。

use rand::Rng;
use std::time::Duration;

use market_shared::config::LatencyConfig;

/// 延迟模拟器
#[derive(Debug, Clone)]
pub struct LatencySimulator {
    config: LatencyConfig,
}

impl LatencySimulator {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    /// 不休眠的模拟器
    pub fn disabled() -> Self {
        Self::new(LatencyConfig::disabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// 抽取一次延迟时长
    ///
    /// 区间上下界颠倒时取下界
    pub fn sample(&self) -> Duration {
        if !self.config.enabled {
            return Duration::ZERO;
        }
        let LatencyConfig { min_ms, max_ms, .. } = self.config;
        let ms = if min_ms >= max_ms {
            min_ms
        } else {
            rand::thread_rng().gen_range(min_ms..=max_ms)
        };
        Duration::from_millis(ms)
    }

    /// 休眠一次并返回实际抽取的时长
    pub async fn pause(&self) -> Duration {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}
