//! A headless model of the page: an element tree with class lists and inline
//! styles, the window's scroll state, the contact form and the alert log.

use std::collections::BTreeMap;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }
}

/// Inline style declarations, keyed by CSS property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn set(&mut self, property: &str, value: &str) {
        self.0.insert(property.to_string(), value.to_string());
    }

    /// Applies a `property: value;` declaration block on top of the current
    /// declarations.
    pub fn set_css_text(&mut self, css: &str) {
        for declaration in css.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                let property = property.trim();
                if !property.is_empty() {
                    self.set(property, value.trim());
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub class_list: ClassList,
    pub style: Style,
    pub inner_html: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class_list.add(class);
        self
    }

    pub fn with_inner_html(mut self, html: &str) -> Self {
        self.inner_html = html.to_string();
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// A scroll the page asked the window to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollAction {
    IntoView {
        target: NodeId,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    },
    To {
        top: f64,
        behavior: ScrollBehavior,
    },
}

#[derive(Debug, Clone)]
pub struct Window {
    pub scroll_y: f64,
    pub inner_width: u32,
    scroll_actions: Vec<ScrollAction>,
}

impl Window {
    pub fn scroll_actions(&self) -> &[ScrollAction] {
        &self.scroll_actions
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            inner_width: 1280,
            scroll_actions: Vec::new(),
        }
    }
}

/// The contact form: its declared attributes and current field values.
#[derive(Debug, Clone, Default)]
pub struct FormElement {
    pub id: String,
    pub action: Option<String>,
    pub method: Option<String>,
    fields: Vec<(String, String)>,
}

impl FormElement {
    pub fn new(id: &str, field_names: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            fields: field_names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    /// `None` when the form has no field with that name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `false` when the form has no field with that name.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, current)) => {
                *current = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for (_, value) in self.fields.iter_mut() {
            value.clear();
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    url: Option<Url>,
    nodes: Vec<Element>,
    body: NodeId,
    window: Window,
    form: Option<FormElement>,
    alerts: Vec<String>,
}

impl Document {
    pub fn new(url: Option<Url>) -> Self {
        Self {
            url,
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            window: Window::default(),
            form: None,
            alerts: Vec::new(),
        }
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Adds `element` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// If `parent` was not created by this document.
    pub fn append_child(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Moves an already created node under `parent`. Appending a node to its
    /// current parent moves it to the end. Returns `false`, leaving the tree
    /// unchanged, when either node does not belong to this document.
    pub fn move_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.get_element(parent).is_none() || self.get_element(child).is_none() {
            return false;
        }
        if let Some(previous) = self.nodes[child.0].parent {
            self.nodes[previous.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Creates a node that is not attached to the tree yet.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            parent: None,
            children: Vec::new(),
            ..element
        });
        id
    }

    pub fn get_element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn get_element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    /// # Panics
    ///
    /// If `node` was not created by this document. See [`Document::get_element`].
    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    /// # Panics
    ///
    /// If `node` was not created by this document.
    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Nodes attached to the tree, in document order.
    fn attached(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev());
        }
        order
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached()
            .into_iter()
            .find(|node| self.element(*node).id.as_deref() == Some(id))
    }

    /// First attached element carrying `class`.
    pub fn query_selector(&self, class: &str) -> Option<NodeId> {
        self.attached()
            .into_iter()
            .find(|node| self.element(*node).class_list.contains(class))
    }

    /// Attached elements carrying any of `classes`, in document order.
    pub fn query_selector_all(&self, classes: &[&str]) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|node| {
                let element = self.element(*node);
                classes.iter().any(|class| element.class_list.contains(class))
            })
            .collect()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn scroll_into_view(&mut self, node: NodeId, behavior: ScrollBehavior, block: ScrollBlock) {
        self.window.scroll_actions.push(ScrollAction::IntoView {
            target: node,
            behavior,
            block,
        });
    }

    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.window.scroll_y = top;
        self.window
            .scroll_actions
            .push(ScrollAction::To { top, behavior });
    }

    pub fn set_form(&mut self, form: FormElement) {
        self.form = Some(form);
    }

    /// The form with the given id, if the page has one.
    pub fn form(&self, id: &str) -> Option<&FormElement> {
        self.form.as_ref().filter(|form| form.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut FormElement> {
        self.form.as_mut().filter(|form| form.id == id)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub(crate) fn push_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
