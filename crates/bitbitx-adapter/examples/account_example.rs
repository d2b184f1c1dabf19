/*
[INPUT]:  DES3 key and account credentials
[OUTPUT]: Registered account and authenticated session
[POS]:    Examples - account flow demonstration
[UPDATE]: When the account flow changes
*/

use bitbitx_adapter::*;

/// Example: Register and login flow
///
/// This example demonstrates the encrypted account flow:
/// 1. Create the client with the DES3 key
/// 2. Register an account (serviceId dna_register)
/// 3. Login (serviceId dna_personLogin)
/// 4. Read the session the login populated
#[tokio::main]
async fn main() {
    println!("=== bitbitx Account Example ===\n");

    // Step 1: Create the client. The DES3 key must be 16 or 24 bytes.
    let des3_key = std::env::var("BITBITX_DES3_KEY").unwrap_or_default();
    let client = match BitbitxClient::new(des3_key.into_bytes()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            eprintln!("Set BITBITX_DES3_KEY to a 16- or 24-byte key.");
            return;
        }
    };
    println!("✓ Client created for {}", client.exchange_name());

    // Step 2: Register. Any non-zero returnCode surfaces as an Api error
    // carrying the server's returnMsg.
    let request = RegisterRequest {
        mobile: "13800000000".to_string(),
        email: "alice@example.com".to_string(),
        name: "alice".to_string(),
        password: "secret".to_string(),
        pay_password: "paysecret".to_string(),
    };
    match client.register(request).await {
        Ok(()) => println!("✓ Registered"),
        Err(e) => println!("✗ Register failed: {}", e),
    }

    // Step 3: Login. On success the session holds (uuid, token) and
    // authenticated calls will send them as headers.
    match client.login("alice", "secret").await {
        Ok(session) => {
            println!("✓ Logged in, uuid: {}", session.uuid);
            println!("  Session stored: {}", client.session().is_authenticated());
        }
        Err(e) if e.is_key_error() => {
            println!("✗ Login failed with a key-class error: {}", e);
            println!("  The DES3 key may not match the server's.");
        }
        Err(e) => println!("✗ Login failed: {}", e),
    }
}
