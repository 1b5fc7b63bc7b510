//! Navigation menu built from a chapter listing.

use serde::Serialize;

use crate::chapter::Chapter;

/// Menu entry for a single chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Chapter slug.
    pub slug: String,
    /// Ordering key, if the file name carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Link target.
    pub href: String,
}

/// Chapters of one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavCategory {
    /// Category name.
    pub name: String,
    /// Chapters in listing order.
    pub items: Vec<NavItem>,
}

/// Chapters grouped per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Navigation {
    categories: Vec<NavCategory>,
}

impl Navigation {
    /// Group chapters by category.
    ///
    /// Categories appear in the order their first chapter is seen; chapters
    /// keep their relative order within a category.
    pub fn from_chapters<'a>(chapters: impl IntoIterator<Item = &'a Chapter>) -> Self {
        let mut categories: Vec<NavCategory> = Vec::new();

        for chapter in chapters {
            let item = NavItem {
                title: chapter.title().to_owned(),
                slug: chapter.slug().to_owned(),
                index: chapter.index(),
                href: chapter.href(),
            };

            match categories
                .iter_mut()
                .find(|category| category.name == chapter.category())
            {
                Some(category) => category.items.push(item),
                None => categories.push(NavCategory {
                    name: chapter.category().to_owned(),
                    items: vec![item],
                }),
            }
        }

        Self { categories }
    }

    /// All categories.
    pub fn categories(&self) -> &[NavCategory] {
        &self.categories
    }

    /// Category by name.
    pub fn category(&self, name: &str) -> Option<&NavCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Check if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
