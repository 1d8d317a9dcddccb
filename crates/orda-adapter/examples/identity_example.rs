/*
[INPUT]:  Demo credentials
[OUTPUT]: Sign-in transcript printed to stdout
[POS]:    Examples - identity flow demonstration
[UPDATE]: When the identity flow changes
*/

use orda_adapter::*;

/// Example: Identity flow
///
/// 1. Register an account (signs it in)
/// 2. Sign out
/// 3. Sign back in and report the identity
#[tokio::main]
async fn main() {
    println!("=== Orda Identity Example ===\n");

    let provider = InMemoryIdentityProvider::new();
    let notifier = TracingNotifier;

    match provider.register("customer@orda.ng", "jollof123").await {
        Ok(identity) => {
            notifier.notify("Success", "Account created successfully!", false);
            println!("✓ Registered {} ({})", identity.email, identity.uid);
        }
        Err(e) => {
            eprintln!("Registration failed: {}", e);
            return;
        }
    }

    if let Err(e) = provider.logout().await {
        eprintln!("Logout failed: {}", e);
        return;
    }
    println!("✓ Signed out");

    match provider.login("customer@orda.ng", "jollof123").await {
        Ok(identity) => println!("✓ Signed in as {}", identity.email),
        Err(e) => eprintln!("Login failed: {}", e),
    }

    println!("\nCurrent identity: {:?}", provider.current_identity().map(|i| i.email));
}
