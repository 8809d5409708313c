//! In-memory model of the page surface the handlers write to.
//!
//! A [`Document`] holds the elements a page exposes by id and records the
//! browser-level side effects (alerts, navigation, reloads) a handler asks
//! for. The HTTP layer turns both into a response.

pub const POST_LIST: ElementId = ElementId("post-list");
pub const POST_DETAILS: ElementId = ElementId("post-details");
pub const COMMENTS_CONTAINER: ElementId = ElementId("comments-container");
pub const LIKE_COUNT: ElementId = ElementId("like-count");
pub const LIKE_BUTTON: ElementId = ElementId("like-button");
pub const CREATE_POST_FORM: ElementId = ElementId("create-post-form");
pub const ADD_COMMENT_FORM: ElementId = ElementId("add-comment-form");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(&'static str);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    /// Trusted markup produced by the view templates.
    Html(String),
    /// Plain text, escaped when the page is rendered.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub content: Content,
}

impl Element {
    fn new(id: ElementId) -> Self {
        Self {
            id,
            content: Content::Empty,
        }
    }

    /// Raw content as a string, markup included.
    pub fn text(&self) -> &str {
        match &self.content {
            Content::Empty => "",
            Content::Html(html) => html,
            Content::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Alert(String),
    Navigate(String),
    Reload,
}

#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
    appended: Vec<ElementId>,
    effects: Vec<Effect>,
}

impl Document {
    pub fn new(ids: &[ElementId]) -> Self {
        Self {
            elements: ids.iter().copied().map(Element::new).collect(),
            ..Default::default()
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Returns the element, appending an empty one to the body first when
    /// the page does not declare it.
    pub fn ensure(&mut self, id: ElementId) -> &mut Element {
        let index = match self.elements.iter().position(|element| element.id == id) {
            Some(index) => index,
            None => {
                self.elements.push(Element::new(id));
                self.appended.push(id);
                self.elements.len() - 1
            }
        };
        &mut self.elements[index]
    }

    /// Elements created by [`Document::ensure`], in creation order.
    pub fn appended(&self) -> impl Iterator<Item = &Element> {
        self.appended.iter().filter_map(|id| self.element(*id))
    }

    /// Replaces the markup of an element. Returns false when the element
    /// does not exist.
    pub fn set_inner_html(&mut self, id: ElementId, html: String) -> bool {
        self.set(id, Content::Html(html))
    }

    pub fn set_text(&mut self, id: ElementId, text: String) -> bool {
        self.set(id, Content::Text(text))
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.effects.push(Effect::Alert(message.into()));
    }

    pub fn navigate(&mut self, url: impl Into<String>) {
        self.effects.push(Effect::Navigate(url.into()));
    }

    pub fn reload(&mut self) {
        self.effects.push(Effect::Reload);
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    fn set(&mut self, id: ElementId, content: Content) -> bool {
        match self.elements.iter_mut().find(|element| element.id == id) {
            Some(element) => {
                element.content = content;
                true
            }
            None => false,
        }
    }
}
