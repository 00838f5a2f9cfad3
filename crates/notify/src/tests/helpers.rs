// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Notification, Notifier, NotifyError};
use santify::RunMetadata;
use santify_domain::{CandidateMapping, ConstraintSet, Participant, RunRng, generate_mapping};
use std::cell::RefCell;

/// Keeps every notification instead of delivering it.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}

/// Accepts the first `limit` notifications and then fails.
pub struct FailingNotifier {
    pub limit: usize,
    pub sent: RefCell<usize>,
}

impl Notifier for FailingNotifier {
    fn send(&self, _notification: &Notification) -> Result<(), NotifyError> {
        let mut sent = self.sent.borrow_mut();
        if *sent >= self.limit {
            return Err(NotifyError::UnknownParticipant(String::from("relay down")));
        }
        *sent += 1;
        Ok(())
    }
}

pub fn create_test_metadata() -> RunMetadata {
    RunMetadata {
        id: String::from("smith"),
        display_name: String::from("Smith Family"),
        year: 2025,
        theme: Some(String::from("Handmade")),
        budget: Some(25),
    }
}

pub fn create_test_participants() -> Vec<Participant> {
    vec![
        Participant::new("Anna", "anna@example.com").with_alias(Some(String::from("Annie"))),
        Participant::new("Ben", "ben@example.com"),
        Participant::new("Cleo", "cleo@example.com"),
    ]
}

pub fn create_test_mapping(participants: &[Participant]) -> CandidateMapping {
    let names: Vec<String> = participants
        .iter()
        .map(|participant| participant.name().to_string())
        .collect();
    let mut rng: RunRng = RunRng::from_seed(7);
    generate_mapping(&names, &ConstraintSet::default(), Some(2025), 1_000, &mut rng).unwrap()
}
