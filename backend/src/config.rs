/* user-service
 * Copyright (C) 2024 Frederic Henrichs <frederic@tinkerforge.com>
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */

use anyhow::{anyhow, Context};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_url: String,
    pub port: u16,
    pub pool_size: u32,
    /// Directory for an additional log file. Logging goes to the terminal only if unset.
    pub log_dir: Option<String>,
}

impl Config {
    /**
     * Read the configuration from the environment. Call `dotenvy::dotenv()` first
     * if a .env file should be taken into account.
     */
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_url = lookup("DB_URL")
            .ok_or_else(|| anyhow!("DB_URL must be defined in the environment variables"))?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
            None => DEFAULT_PORT,
        };

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(size) => size
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| anyhow!("DB_POOL_SIZE must be a positive integer, got '{size}'"))?,
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            db_url,
            port,
            pool_size,
            log_dir: lookup("LOG_DIR"),
        })
    }
}
