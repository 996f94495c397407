//! 食材マッチングモジュール
//!
//! カンマ区切りの食材入力を集合に変換し、カタログの各レシピを
//! 一致率でスコアリングする。

use crate::catalog::RecipeRecord;
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// ユーザーが入力した食材の集合（小文字・前後空白除去済み）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIngredientSet(BTreeSet<String>);

impl UserIngredientSet {
    /// カンマ区切りの入力を解析
    ///
    /// 空白のみ、またはカンマと空白だけの入力は `EmptyIngredientInput`。
    pub fn parse(input: &str) -> Result<Self> {
        let set: BTreeSet<String> = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();

        if set.is_empty() {
            return Err(Error::EmptyIngredientInput);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.0.contains(ingredient)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// カンマ区切りの文字列に戻す
    pub fn to_input_line(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

/// スコア付きレシピ
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecipe {
    pub recipe: &'static RecipeRecord,
    /// 一致率 (0.0〜1.0)
    pub match_score: f64,
    /// 不足している食材（レシピの記載順）
    pub missing: Vec<String>,
    pub matched_count: usize,
}

impl ScoredRecipe {
    /// 1件のレシピをスコアリング
    pub fn score(recipe: &'static RecipeRecord, available: &UserIngredientSet) -> Self {
        let mut matched_count = 0;
        let mut missing = Vec::new();

        for ingredient in recipe.ingredients {
            let ingredient = ingredient.to_lowercase();
            if available.contains(&ingredient) {
                matched_count += 1;
            } else {
                missing.push(ingredient);
            }
        }

        // カタログのレシピは必ず食材を1つ以上持つ
        let match_score = matched_count as f64 / recipe.ingredients.len() as f64;

        Self {
            recipe,
            match_score,
            missing,
            matched_count,
        }
    }

    pub fn is_perfect_match(&self) -> bool {
        self.missing.is_empty()
    }
}

/// 入力文字列でカタログを検索
///
/// 一致率0のレシピは除外し、一致率の降順に並べる。
/// 同点はカタログの宣言順を保つ（安定ソート）。
pub fn search(input: &str, catalog: &'static [RecipeRecord]) -> Result<Vec<ScoredRecipe>> {
    let available = UserIngredientSet::parse(input)?;
    let results = match_ingredients(&available, catalog);

    tracing::debug!(
        ingredients = available.len(),
        matches = results.len(),
        "recipe search finished"
    );
    Ok(results)
}

/// 解析済みの食材集合でカタログをスコアリング
pub fn match_ingredients(
    available: &UserIngredientSet,
    catalog: &'static [RecipeRecord],
) -> Vec<ScoredRecipe> {
    let mut results: Vec<ScoredRecipe> = catalog
        .iter()
        .map(|recipe| ScoredRecipe::score(recipe, available))
        .filter(|scored| scored.match_score > 0.0)
        .collect();

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn names(results: &[ScoredRecipe]) -> Vec<&str> {
        results.iter().map(|r| r.recipe.name).collect()
    }

    #[test]
    fn test_parse_trims_lowercases_and_dedups() {
        let set = UserIngredientSet::parse(" Chicken, RICE ,,chicken , ").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("chicken"));
        assert!(set.contains("rice"));
    }

    #[test]
    fn test_parse_empty_input() {
        for input in ["", "   ", ",", " , ,, "] {
            let err = UserIngredientSet::parse(input).unwrap_err();
            assert!(matches!(err, Error::EmptyIngredientInput), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        for input in ["Egg, milk, egg", "  Soy Sauce ,rice", "a,b,,c, A"] {
            let once = UserIngredientSet::parse(input).unwrap();
            let twice = UserIngredientSet::parse(&once.to_input_line()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_search_chicken_rice() {
        let results = search("chicken, rice", CATALOG).unwrap();
        assert_eq!(names(&results), vec!["Chicken Stir-Fry"]);

        let stir_fry = &results[0];
        assert_eq!(stir_fry.matched_count, 2);
        assert_eq!(stir_fry.match_score, 0.4);
        assert_eq!(stir_fry.missing, vec!["onion", "carrot", "soy sauce"]);
    }

    #[test]
    fn test_search_perfect_match() {
        let results = search("egg, milk, cheese, butter", CATALOG).unwrap();
        let omelette = &results[0];
        assert_eq!(omelette.recipe.name, "Simple Omelette");
        assert_eq!(omelette.match_score, 1.0);
        assert!(omelette.is_perfect_match());

        // cheese は Tomato Pasta にも含まれる
        assert_eq!(names(&results), vec!["Simple Omelette", "Tomato Pasta"]);
    }

    #[test]
    fn test_search_no_match() {
        let results = search("chocolate", CATALOG).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_empty_input() {
        assert!(matches!(search("  ", CATALOG), Err(Error::EmptyIngredientInput)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search("SOY SAUCE", CATALOG).unwrap();
        assert_eq!(names(&results), vec!["Chicken Stir-Fry"]);
        assert_eq!(results[0].matched_count, 1);
    }

    #[test]
    fn test_scores_are_consistent_and_nonzero() {
        let inputs = ["onion, carrot", "cheese", "water, potato, celery, egg", "rice, pasta, milk"];
        for input in inputs {
            for scored in search(input, CATALOG).unwrap() {
                assert!(scored.match_score > 0.0);
                assert!(scored.match_score <= 1.0);
                let expected = scored.matched_count as f64 / scored.recipe.ingredients.len() as f64;
                assert_eq!(scored.match_score, expected);
                assert_eq!(
                    scored.matched_count + scored.missing.len(),
                    scored.recipe.ingredients.len()
                );
            }
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // onion, carrot: Stir-Fry 2/5, Soup 2/5
        let results = search("onion, carrot", CATALOG).unwrap();
        assert_eq!(names(&results), vec!["Chicken Stir-Fry", "Vegetable Soup"]);
        assert_eq!(results[0].match_score, results[1].match_score);
    }

    #[test]
    fn test_results_sorted_descending() {
        let results = search("cheese, pasta, tomato, onion", CATALOG).unwrap();
        assert_eq!(results[0].recipe.name, "Tomato Pasta");
        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }
}
