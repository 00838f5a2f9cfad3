// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::{self, BufRead, Write};

/// Returns whether a typed answer means yes. Anything else is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Asks `question` on stderr and reads one line of answer from `input`.
pub fn confirm<R: BufRead>(question: &str, input: &mut R) -> io::Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer: String = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
