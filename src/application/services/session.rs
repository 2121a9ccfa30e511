//! Interactive RSVP session
//!
//! Drives the menu loop: load the roster at startup, dispatch add/view
//! actions, save on exit. The session owns the single in-memory guest
//! list for the whole run and passes it through each operation
//! explicitly; there is no ambient state.

use std::io;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::RosterService;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{parse_party_size, GuestList, MenuChoice};
use crate::infrastructure::traits::Console;

const WELCOME: &str = "Welcome to the RSVP program!\n\
     This program helps you track the number of guests who are coming to your party.";

const MENU: &str = "\nMenu of Options\n  1) Add a guest\n  2) View full RSVP list\n  3) Save and exit program";

const MSG_EXISTING_LIST: &str = "Guests will be added to your existing list.";
const MSG_NEW_LIST: &str = "You are starting a new list.";
const MSG_INVALID_CHOICE: &str = "Oops! Please enter either 1, 2, or 3.";
const MSG_SIZE_NOT_INTEGER: &str = "Group size must be an integer. Please try again.";
const MSG_SAVED: &str = "Your list has been saved. Have a great party! Goodbye.";
const MSG_NOTHING_TO_SAVE: &str =
    "There was no list to save. To enter guests, please start the program again. Goodbye.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Roster written to disk.
    Saved,
    /// List was empty at exit; nothing was written.
    NothingToSave,
}

/// One interactive run, owning the in-memory guest list.
pub struct Session {
    roster: RosterService,
    console: Arc<dyn Console>,
}

impl Session {
    pub fn new(roster: RosterService, console: Arc<dyn Console>) -> Self {
        Self { roster, console }
    }

    /// Run the interaction loop to completion.
    ///
    /// A missing roster file starts a fresh list. Any other load failure
    /// (corrupt file, I/O error) propagates; the caller reports it and
    /// exits non-zero.
    pub fn run(&self) -> ApplicationResult<SessionOutcome> {
        self.console.line(WELCOME);
        let mut list = self.startup()?;

        loop {
            self.console.line(MENU);
            let input = self.read("Which option would you like to perform (1, 2, or 3)?:")?;
            self.console.blank();

            let Some(choice) = MenuChoice::parse(&input) else {
                self.console.line(MSG_INVALID_CHOICE);
                continue;
            };

            match choice {
                MenuChoice::AddGuest => self.add_guest(&mut list)?,
                MenuChoice::ViewList => self.view_list(&list),
                MenuChoice::SaveAndExit => return self.save_and_exit(&list),
            }
        }
    }

    /// `Startup -> MenuWait`: bind the persisted list, or start fresh.
    fn startup(&self) -> ApplicationResult<GuestList> {
        match self.roster.load() {
            Ok(list) => {
                self.console.line(MSG_EXISTING_LIST);
                self.show_total(&list);
                Ok(list)
            }
            Err(ApplicationError::RosterNotFound(path)) => {
                debug!("no roster at {}, starting fresh", path.display());
                self.console.line(MSG_NEW_LIST);
                Ok(GuestList::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Choice 1: prompt for a guest, append on a valid group size.
    ///
    /// An unparseable size aborts the add for this iteration; no partial
    /// entry is stored.
    fn add_guest(&self, list: &mut GuestList) -> ApplicationResult<()> {
        self.console
            .line("Enter the name of the invited guest, and the number in their group");
        let name = self.read("Name:")?;
        let size = self.read("Number in group:")?;
        self.console.blank();

        match parse_party_size(&size) {
            Ok(party_size) => {
                list.add(&name, party_size);
                self.show_total(list);
            }
            Err(e) => {
                debug!("rejected group size: {}", e);
                self.console.line(MSG_SIZE_NOT_INTEGER);
            }
        }
        Ok(())
    }

    /// Choice 2: print every entry in insertion order, then the total.
    fn view_list(&self, list: &GuestList) {
        self.console.line("Guest name and number in group:");
        for entry in list.iter() {
            self.console
                .line(&format!("{}| {}", entry.name, entry.party_size));
        }
        self.show_total(list);
    }

    /// Choice 3: save the roster, or announce there is nothing to save.
    /// An empty list must not write or overwrite the roster file.
    fn save_and_exit(&self, list: &GuestList) -> ApplicationResult<SessionOutcome> {
        if list.is_empty() {
            self.console.line(MSG_NOTHING_TO_SAVE);
            return Ok(SessionOutcome::NothingToSave);
        }
        self.roster.save(list)?;
        self.console.line(MSG_SAVED);
        Ok(SessionOutcome::Saved)
    }

    fn show_total(&self, list: &GuestList) {
        self.console.line(&format!(
            "The total number of guests is {}",
            list.total_guests()
        ));
    }

    fn read(&self, prompt: &str) -> ApplicationResult<String> {
        self.console
            .read_line(prompt)
            .map_err(|e: io::Error| ApplicationError::OperationFailed {
                context: "read console input".to_string(),
                source: Box::new(e),
            })
    }
}
