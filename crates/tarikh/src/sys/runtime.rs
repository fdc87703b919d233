use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime, control socket disabled: {}", e);
                return;
            }
        };

        rt.block_on(async {
            tokio::spawn(crate::sys::server::run_server(tx.clone()));
            tokio::spawn(crate::config::run_async_watcher(tx));

            std::future::pending::<()>().await;
        });
    });
}
