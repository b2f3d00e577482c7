//! Filling a tile binding element from typed content

use crate::element::{ImageElement, TextElement, TileBindingElement, TilePresentation};
use crate::error::Result;
use crate::template::TileSize;
use crate::tile::content::{
    TileBindingContent, TileBindingContentAdaptive, TileBindingContentContact,
    TileBindingContentIconic,
};

/// Iconic images carry this id so the shell can tell them from badge overlays.
pub const ICONIC_IMAGE_ID: u32 = 1;

impl TileBindingContent {
    /// Append this content's children to `binding` as rendered at `size`.
    ///
    /// Only `binding` is touched. The binding's template must already have
    /// been selected for `size`.
    pub fn populate(&self, binding: &mut TileBindingElement, size: TileSize) -> Result<()> {
        match self {
            Self::Adaptive(adaptive) => populate_adaptive(adaptive, binding),
            Self::Contact(contact) => populate_contact(contact, binding, size),
            Self::Iconic(iconic) => populate_iconic(iconic, binding),
            Self::People(people) => {
                binding.presentation = Some(TilePresentation::People);
                for image in &people.images {
                    binding.push(ImageElement::from(image));
                }
            }
            Self::Photos(photos) => {
                binding.presentation = Some(TilePresentation::Photos);
                for image in &photos.images {
                    binding.push(ImageElement::from(image));
                }
            }
        }
        Ok(())
    }
}

fn populate_adaptive(adaptive: &TileBindingContentAdaptive, binding: &mut TileBindingElement) {
    binding.text_stacking = adaptive.text_stacking;

    if let Some(background) = &adaptive.background_image {
        binding.push(ImageElement::from(background));
    }
    if let Some(peek) = &adaptive.peek_image {
        binding.push(ImageElement::from(peek));
    }
    binding
        .children
        .extend(adaptive.children.iter().map(|child| child.to_element()));
}

fn populate_contact(
    contact: &TileBindingContentContact,
    binding: &mut TileBindingElement,
    size: TileSize,
) {
    binding.presentation = Some(TilePresentation::Contact);

    // Small tiles have no room for the name.
    if size != TileSize::Small {
        if let Some(text) = &contact.text {
            binding.push(TextElement::from(text));
        }
    }
    if let Some(image) = &contact.image {
        binding.push(ImageElement::from(image));
    }
}

fn populate_iconic(iconic: &TileBindingContentIconic, binding: &mut TileBindingElement) {
    if let Some(icon) = &iconic.icon {
        binding.push(ImageElement {
            id: Some(ICONIC_IMAGE_ID),
            ..ImageElement::from(icon)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::{AdaptiveText, AdaptiveTextStyle};
    use crate::template::TemplateName;
    use crate::tile::content::{
        TileBackgroundImage, TileBasicImage, TileBasicText, TileBindingContentPeople,
        TileBindingContentPhotos, TilePeekImage,
    };
    use crate::tile::TileTextStacking;
    use crate::xml::{to_string, XmlNode};

    fn populated(content: TileBindingContent, size: TileSize) -> Result<TileBindingElement> {
        let mut binding = TileBindingElement::new(TemplateName::TileMedium);
        content.populate(&mut binding, size)?;
        Ok(binding)
    }

    fn contact() -> TileBindingContent {
        TileBindingContentContact::new()
            .with_image(TileBasicImage::new("jane.png"))
            .with_text(TileBasicText::new("Jane Doe"))
            .into()
    }

    #[test]
    fn test_contact_small_has_no_text() -> Result<()> {
        let binding = populated(contact(), TileSize::Small)?;
        assert_eq!(binding.children_named("text").count(), 0);
        assert_eq!(binding.children_named("image").count(), 1);
        assert_eq!(binding.presentation, Some(TilePresentation::Contact));
        Ok(())
    }

    #[test]
    fn test_contact_medium_has_one_text() -> Result<()> {
        let binding = populated(contact(), TileSize::Medium)?;
        let texts: Vec<_> = binding
            .children_named("text")
            .filter_map(|text| text.text())
            .collect();
        assert_eq!(texts, ["Jane Doe"]);
        Ok(())
    }

    #[test]
    fn test_contact_name_precedes_photo() -> Result<()> {
        let binding = populated(contact(), TileSize::Large)?;
        let names: Vec<_> = binding.children.iter().map(|child| child.name).collect();
        assert_eq!(names, ["text", "image"]);
        Ok(())
    }

    #[test]
    fn test_people_keeps_order() -> Result<()> {
        let people = TileBindingContentPeople::new()
            .with_image(TileBasicImage::new("a.png"))
            .with_image(TileBasicImage::new("b.png"))
            .with_image(TileBasicImage::new("c.png"));
        let binding = populated(people.into(), TileSize::Wide)?;
        let sources: Vec<_> = binding
            .children_named("image")
            .filter_map(|image| image.attribute("src"))
            .collect();
        assert_eq!(sources, ["a.png", "b.png", "c.png"]);
        assert_eq!(binding.presentation, Some(TilePresentation::People));
        Ok(())
    }

    #[test]
    fn test_photos_keep_order() -> Result<()> {
        let mut photos = TileBindingContentPhotos::new();
        for i in 0..12 {
            photos.add_image(TileBasicImage::new(format!("{i}.jpg")))?;
        }
        let binding = populated(photos.into(), TileSize::Large)?;
        let sources: Vec<_> = binding
            .children_named("image")
            .filter_map(|image| image.attribute("src"))
            .map(str::to_string)
            .collect();
        let expected: Vec<_> = (0..12).map(|i| format!("{i}.jpg")).collect();
        assert_eq!(sources, expected);
        Ok(())
    }

    #[test]
    fn test_iconic_image_has_id() -> Result<()> {
        let iconic = TileBindingContentIconic::new(TileBasicImage::new("icon.png"));
        let binding = populated(iconic.into(), TileSize::Medium)?;
        assert_eq!(
            to_string(&binding.to_element()),
            r#"<binding template="TileMedium"><image id="1" src="icon.png"/></binding>"#
        );
        assert_eq!(binding.presentation, None);
        Ok(())
    }

    #[test]
    fn test_iconic_without_icon_is_empty() -> Result<()> {
        let binding = populated(TileBindingContentIconic::default().into(), TileSize::Small)?;
        assert!(binding.children.is_empty());
        Ok(())
    }

    #[test]
    fn test_adaptive_order() -> Result<()> {
        let mut background = TileBackgroundImage::new("bg.jpg");
        background.hint_overlay = Some(60);
        let adaptive = TileBindingContentAdaptive::new()
            .with_text_stacking(TileTextStacking::Center)
            .with_child(AdaptiveText::new("Mon").with_style(AdaptiveTextStyle::Caption))
            .with_peek_image(TilePeekImage::new("peek.jpg"))
            .with_background_image(background);
        let binding = populated(adaptive.into(), TileSize::Medium)?;
        assert_eq!(
            to_string(&binding.to_element()),
            concat!(
                r#"<binding template="TileMedium" hint-textStacking="center">"#,
                r#"<image src="bg.jpg" placement="background" hint-overlay="60"/>"#,
                r#"<image src="peek.jpg" placement="peek"/>"#,
                r#"<text hint-style="caption">Mon</text>"#,
                "</binding>"
            )
        );
        Ok(())
    }
}
