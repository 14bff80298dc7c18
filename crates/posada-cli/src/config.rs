// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use posada_report::{ClosedRoomInterval, Granularity, RoomType, RoomTypeFilter, parse_report_date};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "posada";
const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub report: ReportDefaults,
    #[serde(default = "seeded_closed_rooms")]
    pub closed_rooms: Vec<ClosedRoomEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            report: ReportDefaults::default(),
            closed_rooms: seeded_closed_rooms(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportDefaults {
    pub granularity: Option<String>,
    pub room_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClosedRoomEntry {
    pub room_id: i64,
    pub room_type: String,
    pub reason: String,
    pub start: String,
    pub end: String,
}

/// The property's standing closure list: the rooms under maintenance,
/// renovation, and water-damage repair through February 2025.
fn seeded_closed_rooms() -> Vec<ClosedRoomEntry> {
    vec![
        ClosedRoomEntry {
            room_id: 5,
            room_type: "standard".to_owned(),
            reason: "Maintenance".to_owned(),
            start: "01 Feb 2025".to_owned(),
            end: "10 Feb 2025".to_owned(),
        },
        ClosedRoomEntry {
            room_id: 12,
            room_type: "deluxe".to_owned(),
            reason: "Renovation".to_owned(),
            start: "05 Feb 2025".to_owned(),
            end: "20 Feb 2025".to_owned(),
        },
        ClosedRoomEntry {
            room_id: 17,
            room_type: "suite".to_owned(),
            reason: "Water Damage".to_owned(),
            start: "15 Feb 2025".to_owned(),
            end: "28 Feb 2025".to_owned(),
        },
    ]
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("POSADA_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set POSADA_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and place values under [report] and [[closed_rooms]]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        self.granularity()
            .with_context(|| format!("invalid [report] in {}", path.display()))?;
        self.room_type()
            .with_context(|| format!("invalid [report] in {}", path.display()))?;
        self.closed_rooms()
            .with_context(|| format!("invalid [[closed_rooms]] in {}", path.display()))?;
        Ok(())
    }

    pub fn granularity(&self) -> Result<Granularity> {
        match self.report.granularity.as_deref() {
            None => Ok(Granularity::Day),
            Some(raw) => Granularity::parse(raw).ok_or_else(|| {
                anyhow!("unsupported granularity {raw:?}; use daily, weekly, or monthly")
            }),
        }
    }

    pub fn room_type(&self) -> Result<RoomTypeFilter> {
        match self.report.room_type.as_deref() {
            None => Ok(RoomTypeFilter::All),
            Some(raw) => RoomTypeFilter::parse(raw).ok_or_else(|| {
                anyhow!("unknown room type {raw:?}; use all or one of the room type names")
            }),
        }
    }

    pub fn closed_rooms(&self) -> Result<Vec<ClosedRoomInterval>> {
        self.closed_rooms
            .iter()
            .map(ClosedRoomEntry::to_interval)
            .collect()
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# posada config\n# Place this file at: {}\n\nversion = 1\n\n[report]\n# Defaults applied when the matching flag is not passed.\ngranularity = \"daily\"\nroom_type = \"all\"\n\n# Rooms withdrawn from inventory, one block per interval.\n[[closed_rooms]]\nroom_id = 5\nroom_type = \"standard\"\nreason = \"Maintenance\"\nstart = \"01 Feb 2025\"\nend = \"10 Feb 2025\"\n\n[[closed_rooms]]\nroom_id = 12\nroom_type = \"deluxe\"\nreason = \"Renovation\"\nstart = \"05 Feb 2025\"\nend = \"20 Feb 2025\"\n\n[[closed_rooms]]\nroom_id = 17\nroom_type = \"suite\"\nreason = \"Water Damage\"\nstart = \"15 Feb 2025\"\nend = \"28 Feb 2025\"\n",
            path.display(),
        )
    }
}

impl ClosedRoomEntry {
    fn to_interval(&self) -> Result<ClosedRoomInterval> {
        let room_type = RoomType::parse(&self.room_type).ok_or_else(|| {
            anyhow!(
                "closed room {} has unknown room type {:?}",
                self.room_id,
                self.room_type
            )
        })?;
        let start = parse_report_date(&self.start)
            .with_context(|| format!("closed room {} start date", self.room_id))?;
        let end = parse_report_date(&self.end)
            .with_context(|| format!("closed room {} end date", self.room_id))?;
        if end < start {
            bail!(
                "closed room {} interval ends {} before it starts {}",
                self.room_id,
                self.end,
                self.start
            );
        }
        Ok(ClosedRoomInterval {
            room_id: self.room_id,
            room_type,
            reason: self.reason.clone(),
            start,
            end,
        })
    }
}
