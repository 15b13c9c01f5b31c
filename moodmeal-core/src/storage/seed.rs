//! Sample recipe catalog used to seed the in-memory store at startup.

use crate::types::{Difficulty, NewRecipe, Nutrition};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed starter catalog. Six recipes covering the common mood tags so
/// every mapping entry has something to recommend.
pub fn sample_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            title: "Rainbow Energy Bowl".to_string(),
            description:
                "A vibrant smoothie bowl packed with superfoods to boost your energy and mood"
                    .to_string(),
            image_url: "https://images.unsplash.com/photo-1511690743698-d9d85f2fbf38?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            cook_time: 15,
            difficulty: Difficulty::Easy,
            cuisine: Some("healthy".to_string()),
            category: Some("breakfast".to_string()),
            ingredients: strings(&[
                "1 frozen banana",
                "1/2 cup frozen mango",
                "1/2 cup frozen berries",
                "1 cup coconut milk",
                "1 tbsp chia seeds",
                "1 tbsp honey",
                "Fresh fruits for topping",
                "Granola for topping",
            ]),
            instructions: strings(&[
                "Blend frozen fruits with coconut milk until smooth",
                "Pour into a bowl",
                "Top with fresh fruits, chia seeds, and granola",
                "Drizzle with honey and serve immediately",
            ]),
            nutrition: Some(Nutrition {
                calories: Some(380.0),
                protein: Some(8.0),
                carbs: Some(65.0),
                fat: Some(12.0),
            }),
            dietary_tags: strings(&["vegan", "gluten-free", "dairy-free"]),
            mood_tags: strings(&["happy", "energetic", "excited"]),
        },
        NewRecipe {
            title: "Garden Fresh Stir-Fry".to_string(),
            description: "Quick and colorful veggie stir-fry that matches your vibrant energy"
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            cook_time: 20,
            difficulty: Difficulty::Easy,
            cuisine: Some("asian".to_string()),
            category: Some("lunch".to_string()),
            ingredients: strings(&[
                "2 cups broccoli florets",
                "1 bell pepper, sliced",
                "1 carrot, julienned",
                "1 cup snap peas",
                "2 cloves garlic, minced",
                "2 tbsp soy sauce",
                "1 tbsp sesame oil",
                "1 tsp ginger, grated",
                "2 tbsp vegetable oil",
            ]),
            instructions: strings(&[
                "Heat vegetable oil in a wok or large pan",
                "Add garlic and ginger, stir-fry for 30 seconds",
                "Add harder vegetables first (broccoli, carrots)",
                "Add remaining vegetables and stir-fry for 3-4 minutes",
                "Add soy sauce and sesame oil, toss to combine",
                "Serve hot over rice or noodles",
            ]),
            nutrition: Some(Nutrition {
                calories: Some(180.0),
                protein: Some(6.0),
                carbs: Some(20.0),
                fat: Some(8.0),
            }),
            dietary_tags: strings(&["vegetarian", "vegan", "low-calorie"]),
            mood_tags: strings(&["happy", "energetic", "fresh"]),
        },
        NewRecipe {
            title: "Chocolate Bliss Balls".to_string(),
            description: "Healthy chocolate energy balls perfect for your happy mood".to_string(),
            image_url: "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            cook_time: 10,
            difficulty: Difficulty::Easy,
            cuisine: Some("healthy".to_string()),
            category: Some("snack".to_string()),
            ingredients: strings(&[
                "1 cup dates, pitted",
                "1/2 cup almonds",
                "2 tbsp cocoa powder",
                "2 tbsp almond butter",
                "1 tsp vanilla extract",
                "Pinch of salt",
                "Coconut flakes for rolling",
            ]),
            instructions: strings(&[
                "Process dates and almonds in food processor until fine",
                "Add cocoa powder, almond butter, vanilla, and salt",
                "Process until mixture holds together",
                "Roll into balls and coat with coconut flakes",
                "Refrigerate for 30 minutes before serving",
            ]),
            nutrition: Some(Nutrition {
                calories: Some(95.0),
                protein: Some(3.0),
                carbs: Some(12.0),
                fat: Some(5.0),
            }),
            dietary_tags: strings(&["vegan", "gluten-free", "no-bake"]),
            mood_tags: strings(&["happy", "satisfied", "comfort"]),
        },
        NewRecipe {
            title: "Cozy Vegetable Soup".to_string(),
            description: "Hearty and warming soup perfect for stressful days".to_string(),
            image_url: "https://images.unsplash.com/photo-1547592180-85f173990554?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            cook_time: 35,
            difficulty: Difficulty::Easy,
            cuisine: Some("comfort".to_string()),
            category: Some("dinner".to_string()),
            ingredients: strings(&[
                "2 cups vegetable broth",
                "1 onion, diced",
                "2 carrots, diced",
                "2 celery stalks, diced",
                "1 potato, cubed",
                "1 can diced tomatoes",
                "1 cup green beans",
                "2 cloves garlic, minced",
                "1 tsp dried herbs",
                "Salt and pepper to taste",
            ]),
            instructions: strings(&[
                "Sauté onion, carrots, and celery until soft",
                "Add garlic and cook for 1 minute",
                "Add broth, tomatoes, and potato",
                "Simmer for 20 minutes",
                "Add green beans and herbs",
                "Cook for 10 more minutes",
                "Season with salt and pepper",
            ]),
            nutrition: Some(Nutrition {
                calories: Some(140.0),
                protein: Some(4.0),
                carbs: Some(30.0),
                fat: Some(1.0),
            }),
            dietary_tags: strings(&["vegetarian", "vegan", "low-fat"]),
            mood_tags: strings(&["stressed", "comfort", "calm"]),
        },
        NewRecipe {
            title: "Fluffy Berry Pancakes".to_string(),
            description: "Start your day with joy - perfect fluffy pancakes with fresh berries"
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1565958011703-44f9829ba187?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            cook_time: 25,
            difficulty: Difficulty::Medium,
            cuisine: Some("american".to_string()),
            category: Some("breakfast".to_string()),
            ingredients: strings(&[
                "2 cups all-purpose flour",
                "2 tbsp sugar",
                "2 tsp baking powder",
                "1 tsp salt",
                "2 eggs",
                "1 3/4 cups milk",
                "1/4 cup melted butter",
                "1 cup mixed berries",
                "Maple syrup for serving",
            ]),
            instructions: strings(&[
                "Mix dry ingredients in a large bowl",
                "Whisk eggs, milk, and melted butter in another bowl",
                "Combine wet and dry ingredients until just mixed",
                "Heat griddle or pan over medium heat",
                "Pour batter and add berries on top",
                "Cook until bubbles form, then flip",
                "Serve hot with maple syrup",
            ]),
            nutrition: Some(Nutrition {
                calories: Some(320.0),
                protein: Some(12.0),
                carbs: Some(52.0),
                fat: Some(8.0),
            }),
            dietary_tags: strings(&["vegetarian"]),
            mood_tags: strings(&["happy", "excited", "celebratory"]),
        },
        NewRecipe {
            title: "Power Quinoa Bowl".to_string(),
            description: "Protein-rich quinoa bowl to fuel your active day".to_string(),
            image_url: "https://images.unsplash.com/photo-1546549032-9571cd6b27df?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            cook_time: 30,
            difficulty: Difficulty::Medium,
            cuisine: Some("healthy".to_string()),
            category: Some("lunch".to_string()),
            ingredients: strings(&[
                "1 cup quinoa",
                "2 cups vegetable broth",
                "1 avocado, sliced",
                "1 cup roasted chickpeas",
                "2 cups spinach",
                "1/2 cup cherry tomatoes",
                "1/4 cup pumpkin seeds",
                "2 tbsp tahini",
                "1 lemon, juiced",
                "1 tbsp olive oil",
            ]),
            instructions: strings(&[
                "Cook quinoa in vegetable broth until tender",
                "Roast chickpeas with olive oil and spices",
                "Mix tahini with lemon juice for dressing",
                "Assemble bowl with quinoa as base",
                "Top with spinach, tomatoes, and avocado",
                "Add roasted chickpeas and pumpkin seeds",
                "Drizzle with tahini dressing",
            ]),
            nutrition: Some(Nutrition {
                calories: Some(520.0),
                protein: Some(20.0),
                carbs: Some(58.0),
                fat: Some(22.0),
            }),
            dietary_tags: strings(&["vegetarian", "vegan", "gluten-free", "high-protein"]),
            mood_tags: strings(&["energetic", "motivated", "focused"]),
        },
    ]
}
