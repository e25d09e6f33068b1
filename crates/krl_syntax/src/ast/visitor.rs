use super::*;

/// AST 遍历接口
///
/// 泛型 R: 每个节点的返回值。实现者自己决定是否下降到子节点。
pub trait Visitor<R> {
    // 访问森林中的一个元素
    fn visit_node(&mut self, node: &Node) -> R;

    // 访问程序文件
    fn visit_source_file(&mut self, file: &SourceFile) -> R;

    // 访问数据文件
    fn visit_data_file(&mut self, file: &DataFile) -> R;

    // 访问函数定义
    fn visit_function(&mut self, function: &FunctionDefinition) -> R;

    // 访问 DEFDAT 块
    fn visit_data_definition(&mut self, definition: &DataDefinition) -> R;
}
