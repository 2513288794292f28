//! # State Module
//!
//! The storefront's state containers.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Commands are tested against just the states they touch
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (composition root)                   │   │
//! │  │  catalog · cart · browse · session · config                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │             │             │              │                   │
//! │          ▼             ▼             ▼              ▼                   │
//! │  ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌──────────────────┐    │
//! │  │CatalogState│ │ CartState  │ │BrowseState │ │  SessionState    │    │
//! │  │            │ │            │ │            │ │                  │    │
//! │  │ Arc<       │ │ Arc<Mutex< │ │ Arc<Mutex< │ │ auth FSM +       │    │
//! │  │  Catalog>  │ │   Cart>>   │ │BrowseQuery>│ │ user directory + │    │
//! │  │ (read-only)│ │            │ │     >      │ │ session store    │    │
//! │  └────────────┘ └────────────┘ └────────────┘ └──────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: immutable after construction, no lock                 │
//! │  • CartState / BrowseState: Arc<Mutex<T>> for exclusive access         │
//! │  • SessionState: auth and directory each behind their own Mutex        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod browse;
mod cart;
mod catalog;
mod session;

pub use browse::{BrowseQuery, BrowseState};
pub use cart::CartState;
pub use catalog::CatalogState;
pub use session::SessionState;
