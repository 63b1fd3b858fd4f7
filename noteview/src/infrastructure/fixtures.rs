// src/infrastructure/fixtures.rs
//
// Sample data every session starts from. Nothing here is ever written back.

use crate::domain::{
    Collaborator, DomainError, HistoryEntry, HistoryVersion, Note, NoteVersion, Permission,
    SharedNote,
};
use crate::util::time::parse_timestamp;

const KICKOFF_CONTENT: &str = "# Project Kickoff Meeting

## Attendees
- John Smith (Project Manager)
- Emily Johnson (Designer)
- Michael Brown (Developer)
- Sarah Williams (Client)

## Agenda
1. Project overview and objectives
2. Timeline and milestones
3. Resource allocation
4. Communication plan
5. Next steps

## Key Points
- Project deadline: June 30, 2023
- Main deliverables: website redesign, mobile app development
- Weekly status meetings every Monday at 10:00 AM
- Communication primarily through Slack and email

## Action Items
- [ ] John to distribute detailed project plan by Friday
- [ ] Emily to prepare initial design concepts by next week
- [ ] Michael to set up development environment and repositories
- [ ] Sarah to provide brand guidelines and assets

## Notes
The client emphasized the importance of mobile responsiveness and performance optimization. We should prioritize these aspects during the development phase.

The initial budget has been approved, but there might be additional funds available for extra features if needed.";

fn note(
    id: &str,
    title: &str,
    content: &str,
    created_at: &str,
    updated_at: &str,
    tags: &[&str],
    is_public: bool,
) -> Result<Note, DomainError> {
    let created_at = parse_timestamp(created_at)?;
    let updated_at = parse_timestamp(updated_at)?;
    Ok(Note::new_at(title, created_at)
        .with_id(id)
        .with_content(content)
        .with_timestamps(created_at, updated_at)
        .with_tags(tags.iter().copied())
        .with_visibility(is_public))
}

fn version(id: &str, timestamp: &str, editor: &str) -> Result<NoteVersion, DomainError> {
    Ok(NoteVersion {
        id: id.to_string(),
        timestamp: parse_timestamp(timestamp)?,
        editor: editor.to_string(),
    })
}

fn history_version(id: &str, timestamp: &str, description: &str) -> Result<HistoryVersion, DomainError> {
    Ok(HistoryVersion {
        id: id.to_string(),
        timestamp: parse_timestamp(timestamp)?,
        change_description: description.to_string(),
    })
}

/// The detailed kickoff note with its collaborators and version trail
pub fn kickoff_note() -> Result<Note, DomainError> {
    Ok(note(
        "1",
        "Meeting Notes - Project Kickoff",
        KICKOFF_CONTENT,
        "2023-04-12T10:30:00Z",
        "2023-04-12T14:45:00Z",
        &["work", "meetings"],
        false,
    )?
    .with_updated_by("John Doe")
    .with_shared_with(vec![
        "user1@example.com".to_string(),
        "user2@example.com".to_string(),
    ])
    .with_versions(vec![
        version("v1", "2023-04-12T10:30:00Z", "John Doe")?,
        version("v2", "2023-04-12T11:45:00Z", "John Doe")?,
        version("v3", "2023-04-12T14:45:00Z", "John Doe")?,
    ]))
}

/// Every note owned by the signed-in user
pub fn all_notes() -> Result<Vec<Note>, DomainError> {
    Ok(vec![
        kickoff_note()?,
        note(
            "2",
            "Research on Neural Networks",
            "Notes on advanced neural network architectures and their applications in image recognition.",
            "2023-04-10T09:15:00Z",
            "2023-04-11T17:20:00Z",
            &["research", "ai"],
            true,
        )?,
        note(
            "3",
            "Weekly Planning - April 2023",
            "Weekly goals, tasks, and priorities for April 2023.",
            "2023-04-02T08:00:00Z",
            "2023-04-09T19:10:00Z",
            &["planning", "personal"],
            false,
        )?,
        note(
            "4",
            "Book Notes: Atomic Habits",
            "Key insights and quotes from James Clear's Atomic Habits.",
            "2023-03-28T15:45:00Z",
            "2023-04-05T11:30:00Z",
            &["books", "personal-development"],
            true,
        )?,
        note(
            "5",
            "Product Features Brainstorm",
            "Ideas for new features and improvements for our product roadmap.",
            "2023-03-20T13:20:00Z",
            "2023-04-01T10:15:00Z",
            &["work", "brainstorming"],
            false,
        )?,
        note(
            "6",
            "Interview Questions for Frontend Developers",
            "A compilation of common interview questions for frontend developer positions.",
            "2023-03-15T09:00:00Z",
            "2023-03-25T14:30:00Z",
            &["career", "interview"],
            true,
        )?,
        note(
            "7",
            "Design System Guidelines",
            "Guidelines and principles for our company's design system.",
            "2023-03-10T11:20:00Z",
            "2023-03-18T16:45:00Z",
            &["design", "work"],
            false,
        )?,
        note(
            "8",
            "Travel Itinerary - Japan 2023",
            "Detailed itinerary for the upcoming Japan trip including accommodations and activities.",
            "2023-03-05T14:10:00Z",
            "2023-03-12T19:20:00Z",
            &["travel", "personal"],
            false,
        )?,
    ])
}

fn shared(
    note: Note,
    sharer_id: &str,
    sharer_name: &str,
    permissions: Permission,
) -> SharedNote {
    SharedNote {
        note,
        shared_by: Collaborator::new(sharer_id, sharer_name),
        permissions,
    }
}

/// Notes other people have shared with the signed-in user
pub fn shared_notes() -> Result<Vec<SharedNote>, DomainError> {
    Ok(vec![
        shared(
            note(
                "10",
                "Team Project Roadmap Q2 2023",
                "Detailed roadmap for our team's Q2 projects and deliverables.",
                "2023-04-10T09:30:00Z",
                "2023-04-15T16:20:00Z",
                &["work", "planning", "roadmap"],
                true,
            )?,
            "user1",
            "Sarah Johnson",
            Permission::Edit,
        ),
        shared(
            note(
                "11",
                "Marketing Campaign Strategy",
                "Strategy document for the upcoming product launch marketing campaign.",
                "2023-04-05T11:15:00Z",
                "2023-04-12T13:40:00Z",
                &["marketing", "strategy"],
                true,
            )?,
            "user2",
            "Michael Brown",
            Permission::View,
        ),
        shared(
            note(
                "12",
                "UI/UX Design Guidelines",
                "Official design guidelines and best practices for our products.",
                "2023-03-28T10:00:00Z",
                "2023-04-08T15:30:00Z",
                &["design", "guidelines"],
                true,
            )?,
            "user3",
            "Emily Davis",
            Permission::Edit,
        ),
        shared(
            note(
                "13",
                "Product Feedback Summary",
                "Compiled feedback from user testing sessions and customer interviews.",
                "2023-03-20T14:25:00Z",
                "2023-04-02T09:15:00Z",
                &["feedback", "user-research"],
                true,
            )?,
            "user4",
            "David Wilson",
            Permission::View,
        ),
    ])
}

fn history(
    id: &str,
    note_id: &str,
    title: &str,
    versions: Vec<HistoryVersion>,
) -> HistoryEntry {
    HistoryEntry {
        id: id.to_string(),
        note_id: note_id.to_string(),
        title: title.to_string(),
        versions,
    }
}

/// Version timelines shown on the history page
pub fn history_entries() -> Result<Vec<HistoryEntry>, DomainError> {
    Ok(vec![
        history(
            "1",
            "101",
            "Project Kickoff Meeting Notes",
            vec![
                history_version("v1-101", "2023-04-20T14:35:00Z", "Initial creation")?,
                history_version("v2-101", "2023-04-20T15:10:00Z", "Added attendee list and action items")?,
                history_version("v3-101", "2023-04-21T09:45:00Z", "Added meeting outcomes and next steps")?,
            ],
        ),
        history(
            "2",
            "102",
            "Product Roadmap 2023",
            vec![
                history_version("v1-102", "2023-04-15T10:20:00Z", "Initial draft")?,
                history_version("v2-102", "2023-04-16T11:05:00Z", "Updated Q2 milestones")?,
                history_version("v3-102", "2023-04-18T13:30:00Z", "Added resource allocation section")?,
                history_version("v4-102", "2023-04-19T16:45:00Z", "Incorporated feedback from leadership team")?,
            ],
        ),
        history(
            "3",
            "103",
            "User Interview Findings",
            vec![
                history_version("v1-103", "2023-04-10T09:15:00Z", "Initial summary of interviews")?,
                history_version("v2-103", "2023-04-12T14:20:00Z", "Added key insights and quotes")?,
            ],
        ),
        history(
            "4",
            "104",
            "Marketing Campaign Strategy",
            vec![
                history_version("v1-104", "2023-04-05T11:30:00Z", "Initial strategy outline")?,
                history_version("v2-104", "2023-04-07T13:45:00Z", "Added budget breakdown")?,
                history_version("v3-104", "2023-04-09T15:10:00Z", "Updated timeline and deliverables")?,
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fixtures_when_loading_then_all_timestamps_parse() {
        assert_eq!(all_notes().unwrap().len(), 8);
        assert_eq!(shared_notes().unwrap().len(), 4);
        assert_eq!(history_entries().unwrap().len(), 4);
    }

    #[test]
    fn given_fixture_notes_when_checking_timestamps_then_updated_never_precedes_created() {
        for note in all_notes().unwrap() {
            assert!(note.updated_at >= note.created_at, "note {}", note.id);
        }
    }

    #[test]
    fn given_kickoff_note_when_loading_then_carries_versions_and_collaborators() {
        let note = kickoff_note().unwrap();

        assert_eq!(note.versions.len(), 3);
        assert_eq!(note.shared_with.len(), 2);
        assert!(note.content.contains("## Action Items"));
    }
}
