//! Static UI text table.
//!
//! Every user-facing string lives here so panels and dialogs stay free of
//! inline literals.

pub struct UiText {
    // Navigation
    pub programs_heading: &'static str,
    pub how_to_button: &'static str,

    // Shared panel furniture
    pub price_prompt: &'static str,
    pub high_prompt: &'static str,
    pub low_prompt: &'static str,
    pub bullish_button: &'static str,
    pub bearish_button: &'static str,
    pub calculate_button: &'static str,
    pub copy_results_button: &'static str,
    pub copy_value_button: &'static str,
    pub waiting_placeholder: &'static str,

    // Control strip
    pub clear_button: &'static str,
    pub save_button: &'static str,
    pub exit_button: &'static str,

    // Notices
    pub ok_button: &'static str,
    pub yes_button: &'static str,
    pub no_button: &'static str,
    pub invalid_input_title: &'static str,
    pub copied_title: &'static str,
    pub copied_body: &'static str,
    pub copied_value_prefix: &'static str,
    pub copy_error_title: &'static str,
    pub save_error_title: &'static str,
    pub save_no_results: &'static str,
    pub save_success_title: &'static str,
    pub save_success_prefix: &'static str,
    pub clear_title: &'static str,
    pub clear_body: &'static str,
    pub exit_title: &'static str,
    pub exit_question: &'static str,

    // How-to panel
    pub how_to_heading: &'static str,
    pub how_to_body: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    programs_heading: "Programs",
    how_to_button: "How to use",

    price_prompt: "Enter Price Level:",
    high_prompt: "Price of High:",
    low_prompt: "Price of Low:",
    bullish_button: "Bullish",
    bearish_button: "Bearish",
    calculate_button: "Calculate",
    copy_results_button: "Copy Results",
    copy_value_button: "Copy",
    waiting_placeholder: "Waiting for input...",

    clear_button: "Clear",
    save_button: "Save File",
    exit_button: "Exit",

    ok_button: "OK",
    yes_button: "Yes",
    no_button: "No",
    invalid_input_title: "Invalid Input",
    copied_title: "Copied",
    copied_body: "Results copied to clipboard!",
    copied_value_prefix: "Copied to clipboard: ",
    copy_error_title: "Copy Error",
    save_error_title: "Save Error",
    save_no_results: "No results to save. Please perform a calculation first.",
    save_success_title: "Success",
    save_success_prefix: "Results successfully saved to:\n",
    clear_title: "Clear",
    clear_body: "Display cleared.",
    exit_title: "Exit",
    exit_question: "Are you sure you want to exit?",

    how_to_heading: "How to Use the Programs",
    how_to_body: "\
1 - Gate Ladder:
    Bring a high or low from a 1-hour timeframe, paste the price, and put
    the ten projected levels on your chart to see how price respects them.

2 - 369 Ladder:
    Same idea as the gate ladder, but the three levels are tuned for
    short-term moves and scalping.

3 - Reversal Lvl:
    Gives you a single level where price is likely to reverse. A session
    high or low works well as the input.

4 - Mid Lvl:
    Useful for scalping retracements: paste a high and a low from a
    15-minute timeframe and watch how price reacts to the midpoint.

Shortcuts: 1-4 switch programs, H opens this page, Escape clears the display.",
};
