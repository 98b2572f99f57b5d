use crossterm::style::Stylize;

const TITLE: &str = r"
   ____                               __   _     _  __
  / ___| __ _ _ __ ___   ___    ___  / _| | |   (_)/ _| ___
 | |  _ / _` | '_ ` _ \ / _ \  / _ \| |_  | |   | | |_ / _ \
 | |_| | (_| | | | | | |  __/ | (_) |  _| | |___| |  _|  __/
  \____|\__,_|_| |_| |_|\___|  \___/|_|   |_____|_|_|  \___|
";

/// Prints the welcome banner. Must be called before raw mode is enabled.
pub fn print_welcome() {
    println!("{}", TITLE.cyan());
    println!("{}", "            * Conway's Game of Life in the terminal *".yellow());
    println!("{}", "\nWelcome to the Game of Life!".green());
    println!("{}", "\n----------------------------------------------------------".magenta());
    println!("{}", "\nA cellular automaton where cells live and die by simple rules.".cyan());
    println!("{}", "Watch complex patterns emerge from them.\n".cyan());
}
