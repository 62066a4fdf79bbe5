//! Hardcoded portfolio shown in the landing page carousels.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub items: Vec<Item>,
}

/// Carousel behaviour the page applies to every category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSettings {
    pub autoplay_delay_ms: u32,
    pub speed_ms: u32,
    pub looped: bool,
    /// `(min viewport width px, slides per view, gap px)`, ascending.
    pub breakpoints: Vec<(u32, u32, u32)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub carousel: CarouselSettings,
    pub categories: Vec<Category>,
}

const WARDROBE_FILES: [&str; 38] = [
    "IMG-20251030-WA0017.jpg",
    "IMG-20251030-WA0029.jpg",
    "IMG-20251030-WA0059.jpg",
    "IMG-20251030-WA0060.jpg",
    "IMG-20251109-WA0005.jpg",
    "IMG-20251109-WA0006.jpg",
    "IMG-20251109-WA0007.jpg",
    "IMG-20251109-WA0008.jpg",
    "IMG-20251109-WA0009.jpg",
    "IMG-20251109-WA0010.jpg",
    "IMG-20251109-WA0011.jpg",
    "IMG-20251109-WA0012.jpg",
    "IMG-20251109-WA0013.jpg",
    "IMG-20251109-WA0014.jpg",
    "IMG-20251109-WA0015.jpg",
    "IMG-20251109-WA0016.jpg",
    "IMG-20251109-WA0017.jpg",
    "IMG-20251109-WA0018.jpg",
    "IMG-20251109-WA0019.jpg",
    "IMG-20251109-WA0020.jpg",
    "IMG-20251109-WA0021.jpg",
    "IMG-20251109-WA0022.jpg",
    "IMG-20251109-WA0023.jpg",
    "IMG-20251109-WA0024.jpg",
    "IMG-20251109-WA0025.jpg",
    "IMG-20251109-WA0026.jpg",
    "IMG-20251109-WA0027.jpg",
    "IMG-20251109-WA0028.jpg",
    "IMG-20251109-WA0029.jpg",
    "IMG-20251109-WA0030.jpg",
    "IMG-20251109-WA0031.jpg",
    "IMG-20251109-WA0032.jpg",
    "IMG-20251109-WA0033.jpg",
    "IMG-20251109-WA0034.jpg",
    "IMG-20251109-WA0035.jpg",
    "IMG-20251109-WA0036.jpg",
    "IMG-20251109-WA0037.jpg",
    "IMG-20251109-WA0038.jpg",
];

fn item(title: &str, description: &str, file: &str, price: &str) -> Item {
    Item {
        title: title.to_string(),
        description: description.to_string(),
        image: format!("/images_in/{}", file),
        price: format!("Starting at {}*", price),
    }
}

pub fn portfolio() -> Portfolio {
    let living = Category {
        id: "living",
        title: "Living Room Interiors",
        items: vec![
            item("Contemporary Living Room", "Modern and elegant spaces", "IMG-20251030-WA0003.jpg", "5.25L"),
            item("Minimalist Decor Room", "Clean and sophisticated design", "IMG-20251030-WA0015.jpg", "4.75L"),
            item("Spacious Family Lounge", "Comfortable gathering spaces", "IMG-20251030-WA0030.jpg", "5.95L"),
            item("Urban Chic Living Space", "Trendy and functional design", "IMG-20251030-WA0050.jpg", "5.45L"),
        ],
    };
    let bedroom = Category {
        id: "bedroom",
        title: "Bedroom Interiors",
        items: vec![
            item("Cozy Master Bedroom", "Luxurious comfort and style", "IMG-20251030-WA0004.jpg", "4.75L"),
            item("Sliding Wardrobe Design", "Space-saving storage solutions", "IMG-20251030-WA0020.jpg", "3.95L"),
            item("Luxury Lighting Bedroom", "Ambient lighting design", "IMG-20251030-WA0035.jpg", "4.25L"),
            item("Modern Theme Bedroom", "Contemporary aesthetics", "IMG-20251030-WA0045.jpg", "3.85L"),
        ],
    };
    let kitchen = Category {
        id: "kitchen",
        title: "Kitchen Interiors",
        items: vec![
            item("Modern Modular Kitchen", "Contemporary design with premium finishes", "IMG-20251030-WA0005.jpg", "3.57L"),
            item("Marble Finish Kitchen", "Elegant and durable surfaces", "IMG-20251030-WA0025.jpg", "4.25L"),
            item("Smart Pantry Unit", "Optimized storage solutions", "IMG-20251030-WA0040.jpg", "2.85L"),
            item("Elegant Wooden Layout", "Warm and inviting design", "IMG-20251030-WA0030.jpg", "3.95L"),
        ],
    };
    let wardrobe = Category {
        id: "wardrobe",
        title: "Wardrobe Interiors",
        items: WARDROBE_FILES
            .iter()
            .enumerate()
            .map(|(i, file)| {
                item(
                    &format!("Wardrobe Design {}", i + 1),
                    "Stylish and functional wardrobe",
                    &format!("wardrobe/{}", file),
                    "2.95L",
                )
            })
            .collect(),
    };

    Portfolio {
        carousel: CarouselSettings {
            autoplay_delay_ms: 2500,
            speed_ms: 600,
            looped: true,
            breakpoints: vec![(320, 1, 10), (768, 2, 15), (1024, 3, 20)],
        },
        categories: vec![living, bedroom, kitchen, wardrobe],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_categories_in_page_order() {
        let ids: Vec<_> = portfolio().categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, ["living", "bedroom", "kitchen", "wardrobe"]);
    }

    #[test]
    fn wardrobe_items_are_numbered() {
        let p = portfolio();
        let wardrobe = &p.categories[3];
        assert_eq!(wardrobe.items.len(), 38);
        assert_eq!(wardrobe.items[0].title, "Wardrobe Design 1");
        assert_eq!(wardrobe.items[37].title, "Wardrobe Design 38");
        assert_eq!(
            wardrobe.items[0].image,
            "/images_in/wardrobe/IMG-20251030-WA0017.jpg"
        );
        assert!(wardrobe.items.iter().all(|i| i.price == "Starting at 2.95L*"));
    }

    #[test]
    fn kitchen_prices() {
        let p = portfolio();
        assert_eq!(p.categories[2].items[0].price, "Starting at 3.57L*");
        assert_eq!(p.categories[2].items[0].image, "/images_in/IMG-20251030-WA0005.jpg");
    }
}
