use chrono::Utc;
use log::info;
use sqlx::{postgres::PgQueryResult, Error as SqlxError, PgPool, Row};

use crate::entity::{TokenCreationResult, TokenLaunch, User};

// Check if user exists in database
pub async fn check_user_exists(pool: &PgPool, telegram_id: i64) -> Result<bool, SqlxError> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM users WHERE telegram_id = $1")
        .bind(telegram_id)
        .fetch_one(pool)
        .await?;

    let count: i64 = row.try_get("count")?;
    Ok(count > 0)
}

// Create new user in database
pub async fn create_user(
    pool: &PgPool,
    telegram_id: i64,
    username: Option<String>,
) -> Result<i32, SqlxError> {
    let row = sqlx::query(
        "INSERT INTO users (telegram_id, username, created_at) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(telegram_id)
    .bind(username)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let id: i32 = row.try_get("id")?;
    info!("Created new user with ID: {}", id);

    Ok(id)
}

// Get user by telegram_id
pub async fn get_user_by_telegram_id(pool: &PgPool, telegram_id: i64) -> Result<User, SqlxError> {
    let row = sqlx::query("SELECT * FROM users WHERE telegram_id = $1")
        .bind(telegram_id)
        .fetch_one(pool)
        .await?;

    let user = User {
        id: row.try_get("id")?,
        telegram_id: row.try_get("telegram_id")?,
        username: row.try_get("username")?,
        solana_address: row.try_get("solana_address")?,
        encrypted_private_key: row.try_get("encrypted_private_key")?,
        mnemonic: row.try_get("mnemonic")?,
        created_at: row.try_get("created_at")?,
    };

    Ok(user)
}

// Save wallet information for a user
pub async fn save_wallet_info(
    pool: &PgPool,
    telegram_id: i64,
    address: &str,
    keypair: &str,
    mnemonic: &str,
) -> Result<PgQueryResult, SqlxError> {
    let result = sqlx::query("UPDATE users SET solana_address = $1, encrypted_private_key = $2, mnemonic = $3 WHERE telegram_id = $4")
        .bind(address)
        .bind(keypair)
        .bind(mnemonic)
        .bind(telegram_id)
        .execute(pool)
        .await?;

    info!(
        "Updated wallet info for user with Telegram ID: {}",
        telegram_id
    );

    Ok(result)
}

// Record a token launch attempt in the database
pub async fn record_launch(
    pool: &PgPool,
    telegram_id: i64,
    name: &str,
    symbol: &str,
    total_supply: i64,
    decimals: i16,
    result: &TokenCreationResult,
) -> Result<i32, SqlxError> {
    let user = get_user_by_telegram_id(pool, telegram_id).await?;

    let status = if result.success { "SUCCESS" } else { "FAILED" };

    let row = sqlx::query(
        "INSERT INTO token_launches (user_id, name, symbol, mint_address, total_supply, decimals, tx_signature, metadata_uri, status, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
    )
    .bind(user.id)
    .bind(name)
    .bind(symbol)
    .bind(result.mint_address.as_deref())
    .bind(total_supply)
    .bind(decimals)
    .bind(result.transaction_signature.as_deref())
    .bind(result.metadata_uri.as_deref())
    .bind(status)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let id: i32 = row.try_get("id")?;
    info!("Recorded token launch with ID: {}", id);

    Ok(id)
}

// Get all launches recorded for a user, newest first
pub async fn get_launches_by_telegram_id(
    pool: &PgPool,
    telegram_id: i64,
) -> Result<Vec<TokenLaunch>, SqlxError> {
    let user = get_user_by_telegram_id(pool, telegram_id).await?;

    let launches = sqlx::query_as::<_, TokenLaunch>(
        "SELECT * FROM token_launches WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    Ok(launches)
}

// Record a swap operation in the database
pub async fn record_swap(
    pool: &PgPool,
    telegram_id: i64,
    from_token: &str,
    to_token: &str,
    amount_in: f64,
    amount_out: f64,
    tx_signature: &Option<String>,
    status: &str,
) -> Result<i32, SqlxError> {
    let user = get_user_by_telegram_id(pool, telegram_id).await?;

    let row = sqlx::query(
        "INSERT INTO swaps (user_id, from_token, to_token, amount_in, amount_out, tx_signature, timestamp, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
    )
    .bind(user.id)
    .bind(from_token)
    .bind(to_token)
    .bind(amount_in)
    .bind(amount_out)
    .bind(tx_signature.as_deref())
    .bind(Utc::now())
    .bind(status)
    .fetch_one(pool)
    .await?;

    let id: i32 = row.try_get("id")?;
    info!("Recorded swap with ID: {}", id);

    Ok(id)
}
