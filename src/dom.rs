//! 文档节点能力抽象
//! 解析器只依赖这里的遍历操作，不直接接触 scraper 的树结构

use scraper::{ElementRef, Selector};

pub trait DocumentNode: Sized {
    /// 匹配选择器的所有后代节点 (不含自身)，保持文档顺序
    fn find_all(&self, selector: &Selector) -> Vec<Self>;

    /// 第一个匹配的后代节点
    fn find_first(&self, selector: &Selector) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    /// 紧随其后的兄弟元素，且需匹配选择器
    fn next_sibling_matching(&self, selector: &Selector) -> Option<Self>;

    /// id 属性等于给定值的后代节点
    fn find_by_id(&self, id: &str) -> Option<Self>;

    /// 直接子元素
    fn element_children(&self) -> Vec<Self>;

    fn attr(&self, name: &str) -> Option<&str>;

    /// 全部文本内容 (含后代)
    fn text(&self) -> String;

    /// 仅直接文本子节点
    fn own_text(&self) -> String;
}

impl<'a> DocumentNode for ElementRef<'a> {
    fn find_all(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).filter(|el| el != self).collect()
    }

    fn next_sibling_matching(&self, selector: &Selector) -> Option<Self> {
        self.next_siblings()
            .find_map(ElementRef::wrap)
            .filter(|el| selector.matches(el))
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn own_text(&self) -> String {
        self.children()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect()
    }
}
