//! Product catalog: the static per-category tables that drive generation.

use std::collections::HashMap;

/// A product category with its sampling parameters.
#[derive(Debug, Clone)]
pub struct Category {
    /// Category name as it appears in the output.
    pub name: String,
    /// Products belonging to this category.
    pub products: Vec<String>,
    /// Units of measure that make sense for this category.
    pub units: Vec<String>,
    /// Inclusive quantity range `(min, max)`.
    pub quantity_range: (u32, u32),
    /// Inclusive replenishment time range `(min, max)` in days.
    pub replenishment_range: (u32, u32),
}

/// Catalog of categories with a flattened product lookup.
///
/// Products are sampled uniformly from the flattened list, so categories with
/// more products are proportionally more frequent in the output.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    /// Flattened product names in catalog order.
    products: Vec<String>,
    /// Product name -> index into `categories`.
    product_to_category: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a list of categories.
    ///
    /// If the same product name appears in more than one category, the last
    /// occurrence wins for category resolution.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut products = Vec::new();
        let mut product_to_category = HashMap::new();
        for (idx, category) in categories.iter().enumerate() {
            for product in &category.products {
                products.push(product.clone());
                product_to_category.insert(product.clone(), idx);
            }
        }
        Self {
            categories,
            products,
            product_to_category,
        }
    }

    /// All product names across categories, in catalog order.
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Resolve the category a product belongs to.
    pub fn category_of(&self, product: &str) -> Option<&Category> {
        self.product_to_category
            .get(product)
            .map(|&idx| &self.categories[idx])
    }

    /// All categories in the catalog.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for Catalog {
    /// The built-in grocery-store catalog.
    fn default() -> Self {
        Self::new(vec![
            category(
                "Grocery",
                &[
                    "Rice", "Pasta", "Flour", "Sugar", "Salt", "Cereal", "Lentils", "Beans",
                ],
                &["grams", "kilograms", "packs", "boxes"],
                (5, 25),
                (7, 20),
            ),
            category(
                "Dairy",
                &["Milk", "Eggs", "Yogurt", "Cheese", "Butter"],
                &["liters", "cartons", "packs"],
                (8, 20),
                (3, 10),
            ),
            category(
                "Fresh Produce",
                &[
                    "Tomatoes", "Onions", "Garlic", "Potatoes", "Apple", "Banana", "Orange",
                    "Spinach", "Carrots",
                ],
                &["grams", "kilograms", "packs", "bunches"],
                (10, 30),
                (2, 7),
            ),
            category(
                "Protein",
                &["Chicken", "Tofu", "Fish", "Shrimp"],
                &["grams", "kilograms", "packs"],
                (5, 15),
                (3, 10),
            ),
            category(
                "Beverages",
                &["Coffee", "Tea", "Olive Oil"],
                &["liters", "bottles", "cans"],
                (10, 25),
                (7, 15),
            ),
            category(
                "Personal Care",
                &[
                    "Soap",
                    "Shampoo",
                    "Toothpaste",
                    "Shaving Cream",
                    "Deodorant",
                    "Moisturizer",
                    "Face Wash",
                ],
                &["bottles", "tubes", "bars", "packs"],
                (8, 20),
                (10, 20),
            ),
            category(
                "Cleaning",
                &["Toilet Paper", "Laundry Detergent", "Dish Soap", "Hand Sanitizer"],
                &["bottles", "packs", "boxes", "cans"],
                (5, 15),
                (10, 20),
            ),
        ])
    }
}

fn category(
    name: &str,
    products: &[&str],
    units: &[&str],
    quantity_range: (u32, u32),
    replenishment_range: (u32, u32),
) -> Category {
    Category {
        name: name.to_string(),
        products: products.iter().map(|s| s.to_string()).collect(),
        units: units.iter().map(|s| s.to_string()).collect(),
        quantity_range,
        replenishment_range,
    }
}
