// Test module for lexer
//
// Unit tests for the numeric input tokenizer, split by category.
