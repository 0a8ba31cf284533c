use log::debug;

use crate::highlight::highlight_segments;
use crate::matcher::ingredient_appears_in;
use crate::model::{CookRecipe, CookStep};

/// The ingredients referenced by one instruction, in the order given
pub fn ingredients_in_instruction<'a, S: AsRef<str>>(
    instruction: &str,
    ingredients: &'a [S],
) -> Vec<&'a str> {
    ingredients
        .iter()
        .map(|item| item.as_ref())
        .filter(|ingredient| ingredient_appears_in(ingredient, instruction))
        .collect()
}

/// Prepare every instruction of a recipe for step-by-step display
pub fn cook_steps<I: AsRef<str>, S: AsRef<str>>(
    instructions: &[I],
    ingredients: &[S],
) -> Vec<CookStep> {
    let steps: Vec<CookStep> = instructions
        .iter()
        .map(|item| item.as_ref())
        .enumerate()
        .map(|(index, instruction)| CookStep {
            index,
            instruction: instruction.to_string(),
            segments: highlight_segments(instruction, ingredients),
            ingredients: ingredients_in_instruction(instruction, ingredients)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();

    debug!(
        "Prepared {} cook steps from {} ingredients",
        steps.len(),
        ingredients.len()
    );
    steps
}

impl CookRecipe {
    pub fn cook_steps(&self) -> Vec<CookStep> {
        cook_steps(&self.instructions, &self.ingredients)
    }
}
