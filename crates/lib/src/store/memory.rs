use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::{NoteStore, StoreError, UserStore};
use crate::Result;
use crate::model::{DeletedNote, DeletedUser, NewNote, NewUser, Note, User};

/// Collection name used in store errors for user records.
const USERS: &str = "users";

/// Collection name used in store errors for note records.
const NOTES: &str = "notes";

/// First ticket number assigned to a note.
const FIRST_TICKET: u64 = 500;

/// A simple in-memory store implementing both `UserStore` and `NoteStore`
/// using `HashMap`s behind read-write locks.
///
/// Suitable for testing, development, or deployments where persistence is
/// handled by saving/loading the entire state to/from a file. It provides
/// that persistence via `save_to_file` and `load_from_file`, serializing
/// the state to JSON.
///
/// Locks are never held across an await point; every trait method completes
/// its locking synchronously before returning.
#[derive(Debug)]
pub struct MemoryStore {
    /// User records keyed by id
    users: RwLock<HashMap<String, User>>,
    /// Note records keyed by id
    notes: RwLock<HashMap<String, Note>>,
    /// Next ticket number to assign to a created note
    next_ticket: RwLock<u64>,
}

/// Serializable snapshot of a MemoryStore for persistence
#[derive(Serialize, Deserialize)]
struct StoreState {
    users: HashMap<String, User>,
    notes: HashMap<String, Note>,
    #[serde(default = "first_ticket")]
    next_ticket: u64,
}

fn first_ticket() -> u64 {
    FIRST_TICKET
}

impl Serialize for MemoryStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let state = StoreState {
            users: self.users.read().unwrap().clone(),
            notes: self.notes.read().unwrap().clone(),
            next_ticket: *self.next_ticket.read().unwrap(),
        };

        state.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MemoryStore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let state = StoreState::deserialize(deserializer)?;

        Ok(MemoryStore {
            users: RwLock::new(state.users),
            notes: RwLock::new(state.notes),
            next_ticket: RwLock::new(state.next_ticket),
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new, empty `MemoryStore`.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            notes: RwLock::new(HashMap::new()),
            next_ticket: RwLock::new(FIRST_TICKET),
        }
    }

    /// Saves the entire store state to a file as JSON.
    ///
    /// # Arguments
    /// * `path` - The path to the file where the state should be saved.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads store state from a JSON file.
    ///
    /// If the file does not exist, a new, empty `MemoryStore` is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::new());
        }

        let json = fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&json).map_err(|e| {
            StoreError::DeserializationFailed {
                store: USERS.to_string(),
                reason: format!("failed to load store state: {e}"),
            }
        })?;

        Ok(store)
    }

    /// Returns the number of user records.
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    /// Returns the number of note records.
    pub fn note_count(&self) -> usize {
        self.notes.read().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = self.users.read().unwrap();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(all)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn create(&self, fields: NewUser) -> Result<User> {
        if fields.username.trim().is_empty() {
            return Err(StoreError::WriteRejected {
                store: USERS.to_string(),
                reason: "username must not be empty".to_string(),
            }
            .into());
        }
        if fields.roles.is_empty() {
            return Err(StoreError::WriteRejected {
                store: USERS.to_string(),
                reason: "roles must not be empty".to_string(),
            }
            .into());
        }

        // The uniqueness check and the insert happen under the same write
        // lock, closing the duplicate-username race between concurrent
        // requests that both passed the controller's pre-check.
        let mut users = self.users.write().unwrap();
        if users.values().any(|u| u.username == fields.username) {
            return Err(StoreError::UniqueViolation {
                store: USERS.to_string(),
                field: "username".to_string(),
                value: fields.username,
            }
            .into());
        }

        let now = Utc::now().timestamp();
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: fields.username,
            password_hash: fields.password_hash,
            roles: fields.roles,
            active: true,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn save(&self, mut user: User) -> Result<User> {
        let mut users = self.users.write().unwrap();
        if !users.contains_key(&user.id) {
            return Err(StoreError::KeyNotFound {
                store: USERS.to_string(),
                key: user.id,
            }
            .into());
        }
        if users
            .values()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(StoreError::UniqueViolation {
                store: USERS.to_string(),
                field: "username".to_string(),
                value: user.username,
            }
            .into());
        }

        user.updated_at = Utc::now().timestamp();
        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn delete(&self, id: &str) -> Result<DeletedUser> {
        let mut users = self.users.write().unwrap();
        match users.remove(id) {
            Some(user) => Ok(DeletedUser {
                username: user.username,
                id: user.id,
            }),
            None => Err(StoreError::KeyNotFound {
                store: USERS.to_string(),
                key: id.to_string(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Note>> {
        let notes = self.notes.read().unwrap();
        let mut all: Vec<Note> = notes.values().cloned().collect();
        all.sort_by_key(|n| n.ticket);
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        let notes = self.notes.read().unwrap();
        Ok(notes.get(id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Note>> {
        let notes = self.notes.read().unwrap();
        Ok(notes.values().find(|n| n.title == title).cloned())
    }

    async fn find_one_by_user(&self, user_id: &str) -> Result<Option<Note>> {
        let notes = self.notes.read().unwrap();
        Ok(notes.values().find(|n| n.user == user_id).cloned())
    }

    async fn create(&self, fields: NewNote) -> Result<Note> {
        if fields.user.trim().is_empty()
            || fields.title.trim().is_empty()
            || fields.text.trim().is_empty()
        {
            return Err(StoreError::WriteRejected {
                store: NOTES.to_string(),
                reason: "user, title, and text must not be empty".to_string(),
            }
            .into());
        }

        let mut notes = self.notes.write().unwrap();
        let ticket = {
            let mut next = self.next_ticket.write().unwrap();
            let ticket = *next;
            *next += 1;
            ticket
        };

        let now = Utc::now().timestamp();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            user: fields.user,
            title: fields.title,
            text: fields.text,
            completed: false,
            ticket,
            created_at: now,
            updated_at: now,
        };
        notes.insert(note.id.clone(), note.clone());

        Ok(note)
    }

    async fn save(&self, mut note: Note) -> Result<Note> {
        let mut notes = self.notes.write().unwrap();
        if !notes.contains_key(&note.id) {
            return Err(StoreError::KeyNotFound {
                store: NOTES.to_string(),
                key: note.id,
            }
            .into());
        }

        note.updated_at = Utc::now().timestamp();
        notes.insert(note.id.clone(), note.clone());

        Ok(note)
    }

    async fn delete(&self, id: &str) -> Result<DeletedNote> {
        let mut notes = self.notes.write().unwrap();
        match notes.remove(id) {
            Some(note) => Ok(DeletedNote {
                title: note.title,
                id: note.id,
            }),
            None => Err(StoreError::KeyNotFound {
                store: NOTES.to_string(),
                key: id.to_string(),
            }
            .into()),
        }
    }
}
