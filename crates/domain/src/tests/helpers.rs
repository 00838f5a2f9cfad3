// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Participant;

pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

pub fn create_test_participant(name: &str) -> Participant {
    Participant::new(name, &format!("{}@example.com", name.to_lowercase()))
}

pub fn create_partnered_participant(name: &str, partner: &str) -> Participant {
    create_test_participant(name).with_partner(Some(String::from(partner)))
}
