//! Gallery cards built from the catalog's curated presets.

use crate::catalog::Catalog;
use crate::config::ImageConfig;
use crate::render::GalleryCard;

/// Builds one card per preset, skipping presets whose garment type is unknown.
#[must_use]
pub fn gallery_cards(catalog: &Catalog, images: &ImageConfig) -> Vec<GalleryCard> {
    catalog
        .presets()
        .iter()
        .enumerate()
        .filter_map(|(index, preset)| {
            let garment = catalog.lookup_garment(&preset.garment_type)?;
            Some(GalleryCard {
                index,
                preset: preset.clone(),
                image: images.resolve(garment.image_for(&preset.color)),
                fallback: images.gallery_fallback.clone(),
                title: garment.name.clone(),
                subtitle: format!("{} - {}", preset.color, preset.size),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GALLERY_FALLBACK_IMAGE;

    #[test]
    fn test_gallery_cards_follow_preset_order() {
        let catalog = Catalog::load().unwrap();
        let cards = gallery_cards(&catalog, &ImageConfig::default());

        assert_eq!(cards.len(), 5);
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Duck Sweatshirt",
                "Duck Pants",
                "Duck Jacket",
                "Duck Sweatshirt",
                "Duck Pants"
            ]
        );
        assert!(cards.iter().enumerate().all(|(i, c)| c.index == i));
    }

    #[test]
    fn test_gallery_card_contents() {
        let catalog = Catalog::load().unwrap();
        let cards = gallery_cards(&catalog, &ImageConfig::default());

        let green = &cards[3];
        assert_eq!(green.subtitle, "green - S");
        assert!(green.image.contains("green-oregon-ducks"));
        assert_eq!(green.fallback, GALLERY_FALLBACK_IMAGE);
    }
}
