// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::generator::{CountingGenerator, Generator};

/// Per-level advance counts from the root level to the frontier; a unique
/// identifier of the path taken through the search tree.
pub(crate) fn stack_path<G>(stack: &[CountingGenerator<G>]) -> Vec<u64>
where
    G: Generator,
{
    stack.iter().map(|gen| gen.advance_count()).collect()
}

/// Per-level residual hints from the root level to the frontier; a snapshot
/// of the unexplored sibling counts along the current path.
pub(crate) fn stack_residuals<G>(stack: &[CountingGenerator<G>]) -> Vec<usize>
where
    G: Generator,
{
    stack.iter().map(|gen| gen.residual()).collect()
}

/// Interprets an objective rendering as a JSON value so that numeric
/// renderings stay numbers in the record; anything unparseable is carried as
/// a JSON string.
pub(crate) fn objective_json(rendered: &str) -> serde_json::Value {
    serde_json::from_str(rendered)
        .unwrap_or_else(|_| serde_json::Value::String(rendered.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_json_keeps_numbers_numeric() {
        assert_eq!(objective_json("-8"), serde_json::json!(-8));
        assert_eq!(objective_json("3.5"), serde_json::json!(3.5));
    }

    #[test]
    fn test_objective_json_falls_back_to_string() {
        assert_eq!(
            objective_json("three parts"),
            serde_json::Value::String("three parts".to_owned())
        );
    }
}
