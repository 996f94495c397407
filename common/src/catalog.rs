//! 組み込みレシピカタログ

/// レシピ（不変、プロセス全体で共有）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeRecord {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static str,
}

/// 組み込みのレシピ一覧（宣言順が同点時の並び順になる）
pub static CATALOG: &[RecipeRecord] = &[
    RecipeRecord {
        name: "Chicken Stir-Fry",
        ingredients: &["chicken", "onion", "carrot", "soy sauce", "rice"],
        instructions: "Chop chicken and veggies. Stir-fry chicken, then add veggies and soy sauce. Serve over rice.",
    },
    RecipeRecord {
        name: "Tomato Pasta",
        ingredients: &["pasta", "tomato", "garlic", "cheese"],
        instructions: "Boil pasta. Sauté garlic and tomato for sauce. Mix pasta with sauce and top with cheese.",
    },
    RecipeRecord {
        name: "Simple Omelette",
        ingredients: &["egg", "milk", "cheese", "butter"],
        instructions: "Whisk eggs and milk. Pour into buttered pan. Add cheese, fold, and serve.",
    },
    RecipeRecord {
        name: "Vegetable Soup",
        ingredients: &["carrot", "celery", "onion", "potato", "water"],
        instructions: "Chop vegetables. Boil in water until soft. Season to taste.",
    },
];

impl RecipeRecord {
    /// 選択時に表示する作り方
    pub fn detail(&self) -> String {
        instructions_detail(self.name, self.instructions)
    }
}

/// 例: "--- Tomato Pasta INSTRUCTIONS ---\n\nBoil pasta. ..."
pub fn instructions_detail(name: &str, instructions: &str) -> String {
    format!("--- {} INSTRUCTIONS ---\n\n{}", name, instructions)
}

/// 名前でレシピを検索（大文字小文字を区別しない）
pub fn find_recipe(name: &str) -> Option<&'static RecipeRecord> {
    let name = name.trim();
    CATALOG.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}
