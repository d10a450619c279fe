//! Prompt assembly — few-shot table plus the caller's mood, ending on an open "Quote:" turn.

use crate::models::conversation::Turn;
use crate::quote::prompts::{FEW_SHOT_EXAMPLES, MOOD_TURN_TEMPLATE, QUOTE_MARKER, SYSTEM_PROMPT};

/// Conversation ready to hand to a generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub turns: Vec<Turn>,
}

/// Holds the system instruction and the few-shot table. Built once at startup, read-only after.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    system_instruction: &'static str,
    examples: Vec<Turn>,
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptAssembler {
    pub fn new() -> Self {
        Self {
            system_instruction: SYSTEM_PROMPT,
            examples: FEW_SHOT_EXAMPLES
                .iter()
                .map(|(role, text)| Turn {
                    role: *role,
                    parts: vec![text.to_string()],
                })
                .collect(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        self.system_instruction
    }

    pub fn examples(&self) -> &[Turn] {
        &self.examples
    }

    /// Appends the mood turn and the open marker turn to a copy of the few-shot table.
    ///
    /// The caller is expected to pass an already-trimmed, non-empty mood.
    pub fn assemble(&self, mood: &str) -> GenerationRequest {
        let mut turns = Vec::with_capacity(self.examples.len() + 2);
        turns.extend_from_slice(&self.examples);
        turns.push(Turn::user(MOOD_TURN_TEMPLATE.replace("{mood}", mood)));
        turns.push(Turn::model(QUOTE_MARKER));
        GenerationRequest { turns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conversation::Role;

    #[test]
    fn test_assemble_appends_exactly_two_turns() {
        let assembler = PromptAssembler::new();
        let request = assembler.assemble("Grumpy");

        let base = assembler.examples().len();
        assert_eq!(request.turns.len(), base + 2);
        assert_eq!(&request.turns[..base], assembler.examples());
        assert_eq!(request.turns[base], Turn::user("My mood: Grumpy"));
        assert_eq!(request.turns[base + 1], Turn::model("Quote:"));
    }

    #[test]
    fn test_assemble_keeps_few_shot_order_and_wording() {
        let request = PromptAssembler::new().assemble("Tired");
        assert_eq!(request.turns[0].role, Role::User);
        assert_eq!(request.turns[0].parts, vec!["My mood: Hopeful".to_string()]);
        assert_eq!(
            request.turns[29].parts,
            vec!["Quote: If at first you don’t succeed, redefine success and move on.".to_string()]
        );
    }

    #[test]
    fn test_assemble_is_idempotent_and_does_not_grow_base() {
        let assembler = PromptAssembler::new();
        let first = assembler.assemble("Anxious");
        let second = assembler.assemble("Anxious");

        assert_eq!(first, second);
        assert_eq!(assembler.examples().len(), FEW_SHOT_EXAMPLES.len());
    }

    #[test]
    fn test_assemble_inserts_mood_literally() {
        // Braces in the mood must not be treated as a template slot.
        let request = PromptAssembler::new().assemble("{mood} & 😐");
        let user_turn = &request.turns[request.turns.len() - 2];
        assert_eq!(user_turn.parts, vec!["My mood: {mood} & 😐".to_string()]);
    }

    #[test]
    fn test_system_instruction_is_not_a_turn() {
        let assembler = PromptAssembler::new();
        let request = assembler.assemble("Chill");
        assert!(request
            .turns
            .iter()
            .all(|t| t.parts.iter().all(|p| p != assembler.system_instruction())));
    }
}
