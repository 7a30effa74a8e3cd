//! Addon descriptor queries.
//!
//! The checker only needs one capability from the parsed `addon.xml`: find
//! every element with a given tag and read its text. [`DescriptorQuery`] is
//! that seam; it is implemented for [`roxmltree::Document`].

use serde::{Deserialize, Serialize};

/// An image reference declared in the addon descriptor.
///
/// `text` holds a path relative to the addon root. `None` or an empty string
/// is an empty tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub text: Option<String>,
}

impl ImageDescriptor {
    pub fn new(text: Option<impl Into<String>>) -> Self {
        Self {
            text: text.map(Into::into),
        }
    }

    /// Synthetic descriptor pointing at a conventional default file name.
    pub fn fallback(file_name: &str) -> Self {
        Self {
            text: Some(file_name.to_string()),
        }
    }

    /// The declared path, if the tag is not empty.
    pub fn path_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Finds image elements in a parsed addon descriptor.
pub trait DescriptorQuery {
    /// Returns every element named `tag`, in document order.
    fn find_images(&self, tag: &str) -> Vec<ImageDescriptor>;
}

impl DescriptorQuery for roxmltree::Document<'_> {
    /// Matches elements nested at least two levels below the root element,
    /// i.e. `<addon><extension><assets><icon>`, never a direct child of
    /// `<addon>`.
    fn find_images(&self, tag: &str) -> Vec<ImageDescriptor> {
        self.root_element()
            .children()
            .filter(|child| child.is_element())
            .flat_map(|child| child.descendants().skip(1))
            .filter(|node| node.is_element() && node.tag_name().name() == tag)
            .map(|node| ImageDescriptor::new(node.text()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDON_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<addon id="plugin.video.example" name="Example" version="1.0.0">
  <extension point="xbmc.python.pluginsource" library="main.py"/>
  <extension point="xbmc.addon.metadata">
    <assets>
      <icon>resources/icon.png</icon>
      <fanart></fanart>
      <screenshot>resources/screenshot-01.jpg</screenshot>
      <screenshot>resources/screenshot-02.jpg</screenshot>
    </assets>
  </extension>
</addon>"#;

    #[test]
    fn test_find_images_reads_text() {
        let doc = roxmltree::Document::parse(ADDON_XML).unwrap();
        let icons = doc.find_images("icon");
        assert_eq!(icons, vec![ImageDescriptor::fallback("resources/icon.png")]);
    }

    #[test]
    fn test_find_images_keeps_document_order() {
        let doc = roxmltree::Document::parse(ADDON_XML).unwrap();
        let shots: Vec<Option<String>> = doc
            .find_images("screenshot")
            .into_iter()
            .map(|d| d.text)
            .collect();
        assert_eq!(
            shots,
            vec![
                Some("resources/screenshot-01.jpg".to_string()),
                Some("resources/screenshot-02.jpg".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_tag_has_no_path_text() {
        let doc = roxmltree::Document::parse(ADDON_XML).unwrap();
        let fanart = doc.find_images("fanart");
        assert_eq!(fanart.len(), 1);
        assert_eq!(fanart[0].path_text(), None);
    }

    #[test]
    fn test_missing_tag_returns_empty() {
        let doc = roxmltree::Document::parse(ADDON_XML).unwrap();
        assert!(doc.find_images("banner").is_empty());
    }

    #[test]
    fn test_direct_child_of_root_is_not_matched() {
        let doc = roxmltree::Document::parse(
            r#"<addon><icon>top.png</icon><extension><icon>nested.png</icon></extension></addon>"#,
        )
        .unwrap();
        let icons = doc.find_images("icon");
        assert_eq!(icons, vec![ImageDescriptor::fallback("nested.png")]);
    }

    #[test]
    fn test_path_text_filters_empty_string() {
        assert_eq!(ImageDescriptor::new(Some("")).path_text(), None);
        assert_eq!(ImageDescriptor::new(None::<String>).path_text(), None);
        assert_eq!(ImageDescriptor::fallback("icon.png").path_text(), Some("icon.png"));
    }
}
