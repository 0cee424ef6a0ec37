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

use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
pub use backend::*;
use backend::config::Config;
use db_connector::{get_connection_pool, pg::PgUserStore};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn init_logging(log_dir: Option<&str>) -> anyhow::Result<()> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        LOG_LEVEL,
        log_config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    if let Some(dir) = log_dir {
        let path = format!(
            "{}/user-service-{}.log",
            dir,
            chrono::Local::now().format("%Y-%m-%d-%H")
        );
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Could not create log file {path}"))?;
        loggers.push(WriteLogger::new(LevelFilter::Info, log_config, file));
    }

    CombinedLogger::init(loggers)?;

    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logging(config.as_ref().ok().and_then(|c| c.log_dir.as_deref()))?;
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err:#}");
            std::process::exit(1);
        }
    };

    let pool = get_connection_pool(&config.db_url, config.pool_size)
        .context("Could not connect to database")?;
    let state = web::Data::new(AppState::new(PgUserStore::new(pool)));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    });

    let addr = format!("0.0.0.0:{}", config.port);
    log::info!("Listening at port {}", config.port);
    server.bind(&addr)?.run().await?;

    Ok(())
}
