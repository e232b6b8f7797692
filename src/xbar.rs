//! Plugin output for the xbar menu-bar host.
//!
//! The first line is the status-bar title, `---` separates the title from
//! the dropdown and groups inside it, and attributes follow a ` | `.

pub const SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub text: String,
    pub href: Option<String>,
    pub dropdown: Option<bool>,
}

impl MenuItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
            dropdown: None,
        }
    }

    pub fn separator() -> Self {
        Self::text(SEPARATOR)
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn dropdown(mut self, dropdown: bool) -> Self {
        self.dropdown = Some(dropdown);
        self
    }

    pub fn render(&self) -> String {
        let mut attributes = Vec::new();
        if let Some(href) = &self.href {
            attributes.push(format!("href={href}"));
        }
        if let Some(dropdown) = self.dropdown {
            attributes.push(format!("dropdown={dropdown}"));
        }

        if attributes.is_empty() {
            self.text.clone()
        } else {
            format!("{} | {}", self.text, attributes.join(" "))
        }
    }
}

#[derive(Debug, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: MenuItem) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(MenuItem::text(text))
    }

    pub fn separator(&mut self) -> &mut Self {
        self.push(MenuItem::separator())
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = MenuItem>) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// One item per line, every line newline-terminated.
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}\n", item.render()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_attributes_after_pipe() {
        assert_eq!(MenuItem::text("plain").render(), "plain");
        assert_eq!(
            MenuItem::text("ABC-1").href("https://x/browse/ABC-1").render(),
            "ABC-1 | href=https://x/browse/ABC-1"
        );
        assert_eq!(
            MenuItem::text("1.2 🧾1").dropdown(false).render(),
            "1.2 🧾1 | dropdown=false"
        );
    }

    #[test]
    fn renders_menu_lines() {
        let mut menu = Menu::new();
        menu.line("title").separator().push(MenuItem::text("item").href("u"));

        assert_eq!(menu.render(), "title\n---\nitem | href=u\n");
    }
}
