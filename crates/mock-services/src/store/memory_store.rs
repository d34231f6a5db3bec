//! 内存存储
//!
//! 使用读写锁保护的有序集合，保留插入顺序，适用于测试和开发环境。

use parking_lot::RwLock;
use std::sync::Arc;

/// 可按主键检索的记录
pub trait Keyed {
    fn key(&self) -> &str;
}

/// 通用内存存储
///
/// 列表按插入顺序返回，克隆实例共享同一份数据。
#[derive(Debug)]
pub struct MemoryStore<T> {
    data: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone + Keyed> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Keyed> MemoryStore<T> {
    /// 创建新的内存存储实例
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 插入或更新数据
    ///
    /// key 已存在时原位覆盖，否则追加到末尾
    pub fn insert(&self, value: T) {
        let mut data = self.data.write();
        match data.iter().position(|item| item.key() == value.key()) {
            Some(index) => data[index] = value,
            None => data.push(value),
        }
    }

    /// 获取数据
    ///
    /// 返回数据的克隆，不持有锁
    pub fn get(&self, id: &str) -> Option<T> {
        self.data.read().iter().find(|item| item.key() == id).cloned()
    }

    /// 原位修改数据
    ///
    /// 返回修改后的克隆，key 不存在时返回 None
    pub fn update<F>(&self, id: &str, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut data = self.data.write();
        let item = data.iter_mut().find(|item| item.key() == id)?;
        mutate(item);
        Some(item.clone())
    }

    /// 列出所有数据
    pub fn list(&self) -> Vec<T> {
        self.data.read().clone()
    }

    /// 按条件筛选数据
    pub fn list_by<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.data
            .read()
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// 获取数据总数
    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    /// 清空所有数据
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// 检查是否存在指定 key
    pub fn contains(&self, id: &str) -> bool {
        self.data.read().iter().any(|item| item.key() == id)
    }

    /// 批量插入数据
    pub fn insert_many<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}
