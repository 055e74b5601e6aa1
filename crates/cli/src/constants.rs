// Menu text and defaults (no magic values in the session loop)

/// Branch name shown in the banner when none is configured
pub const DEFAULT_BRANCH: &str = "Bank";

/// Fallback log directive when RUST_LOG is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

pub const RULE: &str = "-----------------------------";

// Role menu
pub const ROLE_MENU: &str = "1. Customer\n2. Bank Executive\n3. Exit";
pub const ROLE_PROMPT: &str = "Choose role: ";
pub const ROLE_INVALID_INPUT: &str = "Enter number only.";
pub const ROLE_INVALID_CHOICE: &str = "Choose 1 (Customer), 2 (Bank Executive) or 3 (Exit).";
pub const GOODBYE: &str = "Goodbye!";

// Sub-menus
pub const CUSTOMER_MENU_TITLE: &str = "-- Customer Menu --";
pub const CUSTOMER_MENU: &str = "1. Queue Me (get token)\n2. Check Queue / My Position\n3. Back";
pub const STAFF_MENU_TITLE: &str = "-- Bank Executive Menu --";
pub const STAFF_MENU: &str = "1. Serve Next\n2. Delete Token\n3. Show Queue Summary\n4. Back";
pub const MENU_PROMPT: &str = "Choose: ";
pub const INVALID_INPUT: &str = "Invalid input.";
pub const INVALID_CHOICE: &str = "Invalid choice.";

// Customer flow
pub const NAME_PROMPT: &str = "Enter your name: ";
pub const NAME_REQUIRED: &str = "Name required.";
pub const CHECK_POSITION_PROMPT: &str = "Check your token position? (y/n): ";
pub const TOKEN_PROMPT: &str = "Enter your token number: ";
pub const INVALID_TOKEN: &str = "Invalid token.";
pub const NOT_IN_QUEUE: &str = "Token not in queue (maybe served or never issued).";

// Staff flow
pub const NOTHING_TO_SERVE: &str = "No customers to serve.";
pub const DELETE_PROMPT: &str = "Enter token to delete: ";
pub const DELETE_REFUSED: &str = "Cannot delete. Token already served or invalid.";
