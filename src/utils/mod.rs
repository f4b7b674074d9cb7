//! Small shared helpers.
//!
//! | Module   | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `date`   | `YYYY-MM-DD` / `MM/DD/YY` parsing and timestamps |
//! | `html`   | Escaping and class/type chips                    |
//! | `path`   | Path normalization, page ids from file paths     |
//! | `plural` | Count + noun formatting for log lines            |

pub mod date;
pub mod html;
pub mod path;
pub mod plural;
