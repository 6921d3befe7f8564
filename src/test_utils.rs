#[cfg(test)]
pub mod test_helpers {
    use crate::config::Config;
    use crate::document::{Document, NodeId};
    use crate::geometry::{Rect, Size};
    use crate::navigator::Navigator;

    pub const ITEM_CLASS: &str = "nav-item";

    /// A document with a container at the origin holding one `.nav-item`
    /// child per `(left, top, width, height)` tuple
    pub fn doc_with_items(items: &[(f64, f64, f64, f64)]) -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new(Size::new(1000.0, 1000.0));
        let root = doc.root();
        let container = doc.append(root, "div", Rect::new(0.0, 0.0, 1000.0, 1000.0));
        let ids = items
            .iter()
            .enumerate()
            .map(|(i, &(left, top, width, height))| {
                let id = doc.append(container, "div", Rect::new(left, top, width, height));
                doc.add_class(id, ITEM_CLASS);
                doc.set_label(id, &format!("item {}", i));
                id
            })
            .collect();
        (doc, container, ids)
    }

    /// Four 100x50 cards at (0,0), (100,0), (0,50), (100,50)
    pub fn card_grid() -> (Document, NodeId, Vec<NodeId>) {
        doc_with_items(&[
            (0.0, 0.0, 100.0, 50.0),
            (100.0, 0.0, 100.0, 50.0),
            (0.0, 50.0, 100.0, 50.0),
            (100.0, 50.0, 100.0, 50.0),
        ])
    }

    /// A container 100 tall showing two of `count` stacked 50-tall rows
    pub fn scrolling_list(count: usize) -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new(Size::new(400.0, 400.0));
        let root = doc.root();
        let container = doc.append(root, "div", Rect::new(0.0, 0.0, 200.0, 100.0));
        let ids = (0..count)
            .map(|i| {
                let id = doc.append(container, "div", Rect::new(0.0, i as f64 * 50.0, 200.0, 50.0));
                doc.add_class(id, ITEM_CLASS);
                id
            })
            .collect();
        (doc, container, ids)
    }

    pub fn enabled_navigator(doc: Document, container: NodeId) -> Navigator<Document> {
        let mut nav = Navigator::new(doc, container, Config::default());
        nav.enable();
        nav
    }
}
