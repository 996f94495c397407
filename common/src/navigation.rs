//! セクション切り替え

/// 表示中のセクション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    WaterTracker,
    FoodJournal,
    RecipeSuggester,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::WaterTracker,
        Section::FoodJournal,
        Section::RecipeSuggester,
    ];

    /// セクション要素のID
    pub fn id(&self) -> &'static str {
        match self {
            Section::WaterTracker => "water-tracker-section",
            Section::FoodJournal => "food-journal-section",
            Section::RecipeSuggester => "recipe-suggester-section",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::WaterTracker => "Water Tracker",
            Section::FoodJournal => "Food Journal",
            Section::RecipeSuggester => "Recipe Suggester",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// ナビゲーションの遷移（未知のIDなら現在のセクションのまま）
pub fn navigate(current: Section, requested_id: &str) -> Section {
    Section::from_id(requested_id).unwrap_or(current)
}
