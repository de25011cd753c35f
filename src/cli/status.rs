//
//  baruwa-cli
//  cli/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `baruwa systemstatus`

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;

/// Show gateway health and queue counters
#[derive(Args, Debug)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let status = client.get_system_status().await?;
        writer.write(&status)
    }
}
