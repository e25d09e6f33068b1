//! AST 到符号表的后绑定引用
//!
//! 符号表由 `krl_sema` 创建并存放在 arena 里，AST 节点只保存它的索引。
//! 索引在解析之后、由语义分析写入且只能写一次。

use std::cell::OnceCell;
use std::fmt;

/// 符号表在 arena 中的索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 只能写入一次的符号表引用
///
/// 解析器创建的节点里总是空的；语义分析调用 [`ScopeSlot::bind`] 写入。
/// 第二次写入失败并返回已绑定的值，保证“一次遍历只填充一次”。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSlot(OnceCell<ScopeId>);

impl ScopeSlot {
    /// 空引用
    pub fn new() -> Self {
        Self::default()
    }

    /// 已绑定的引用，用于构造预期的 AST
    pub fn bound(id: ScopeId) -> Self {
        Self(OnceCell::from(id))
    }

    pub fn get(&self) -> Option<ScopeId> {
        self.0.get().copied()
    }

    pub fn is_bound(&self) -> bool {
        self.0.get().is_some()
    }

    /// 绑定符号表
    ///
    /// # Errors
    ///
    /// 已经绑定过时返回原来的 [`ScopeId`]，新值被丢弃。
    pub fn bind(&self, id: ScopeId) -> Result<(), ScopeId> {
        match self.0.set(id) {
            Ok(()) => Ok(()),
            Err(_) => Err(self.get().unwrap_or(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_once() {
        let slot = ScopeSlot::new();
        assert!(!slot.is_bound());

        assert_eq!(slot.bind(ScopeId::new(3)), Ok(()));
        assert_eq!(slot.get(), Some(ScopeId::new(3)));

        // 第二次绑定失败，保留第一次的值
        assert_eq!(slot.bind(ScopeId::new(4)), Err(ScopeId::new(3)));
        assert_eq!(slot.get(), Some(ScopeId::new(3)));
    }

    #[test]
    fn test_equality_includes_binding() {
        assert_eq!(ScopeSlot::new(), ScopeSlot::default());
        assert_eq!(ScopeSlot::bound(ScopeId::new(1)), ScopeSlot::bound(ScopeId::new(1)));
        assert_ne!(ScopeSlot::new(), ScopeSlot::bound(ScopeId::new(1)));
    }
}
