//! Pretty terminal output with colors and badges.

use colored::Colorize;

// === Startup ===

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                                           ║".cyan());
    println!("║     {}        ║", "🧭 Explorer Tokens v0.1.0".bold().white());
    println!("║     {}     ║", "Signed tokens for the Explorer platform  ".dimmed());
    println!("{}", "║                                                           ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}        {}", "POST".yellow(), "/tokens/access".white(), "Issue login access token".dimmed());
    println!("  {} {}         {}", "POST".yellow(), "/tokens/reset".white(), "Issue password reset token".dimmed());
    println!("  {} {}  {}", "POST".yellow(), "/tokens/confirmation".white(), "Issue registration confirmation token".dimmed());
    println!("  {} {}              {}", "GET ".green(), "/metrics".white(), "Telemetry".dimmed());
    println!("  {} {}               {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!();
}

// === Badges ===

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

// === Issuance Events ===

pub fn log_access(username: &str, role: &str) {
    println!(
        "{} {} {} {} {}",
        badge("ACCESS", colored::Color::Black, colored::Color::Green),
        "user:".dimmed(), username.white(),
        "role:".dimmed(), role.cyan()
    );
}

pub fn log_reset(user_id: i64) {
    println!(
        "{} {} {}",
        badge("RESET", colored::Color::Black, colored::Color::Yellow),
        "user:".dimmed(),
        user_id.to_string().white()
    );
}

pub fn log_confirmation(username: &str) {
    println!(
        "{} {} {} {}",
        badge("CONFIRM", colored::Color::Black, colored::Color::Blue),
        "user:".dimmed(), username.white(),
        "✓ registration".green()
    );
}
