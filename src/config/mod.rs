use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Hour of day (local time) at which a new attendance day begins.
    #[serde(default = "default_day_cutoff_hour")]
    pub day_cutoff_hour: u32,
    /// Late cutoff per shift, "HH:MM".
    #[serde(default = "default_shift_cutoffs")]
    pub shift_cutoffs: BTreeMap<String, String>,
    /// Raw page catalog: tag (normalized at load) → display label.
    #[serde(default = "default_pages")]
    pub pages: BTreeMap<String, String>,
}

fn default_timezone() -> String {
    "Asia/Manila".to_string()
}

fn default_day_cutoff_hour() -> u32 {
    6
}

fn default_shift_cutoffs() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("prime".to_string(), "08:00".to_string()),
        ("mid".to_string(), "16:00".to_string()),
        ("night".to_string(), "22:00".to_string()),
    ])
}

fn default_pages() -> BTreeMap<String, String> {
    [
        ("alannafreeoftv", "Alanna Free / OFTV"),
        ("alannapaid", "Alanna Paid"),
        ("alannawelcome", "Alanna Welcome"),
        ("alexis", "Alexis"),
        ("allyfree", "Ally Free"),
        ("allypaid", "Ally Paid"),
        ("aprilb", "April B"),
        ("ashley", "Ashley"),
        ("asiadollpaidfree", "Asia Doll Paid / Free"),
        ("autumnfree", "Autumn Free"),
        ("autumnpaid", "Autumn Paid"),
        ("autumnwelcome", "Autumn Welcome"),
        ("brifreeoftv", "Bri Free / OFTV"),
        ("bripaid", "Bri Paid"),
        ("briwelcome", "Bri Welcome"),
        ("brittanyamain", "Brittanya Main"),
        ("brittanyapaidfree", "Brittanya Paid / Free"),
        ("bronwinfree", "Bronwin Free"),
        ("bronwinoftvmcarteroftv", "Bronwin OFTV & MCarter OFTV"),
        ("bronwinpaid", "Bronwin Paid"),
        ("bronwinwelcome", "Bronwin Welcome"),
        ("carterpaidfree", "Carter Paid / Free"),
        ("christipaidfree", "Christi Paid and Free"),
        ("claire", "Claire"),
        ("cocofree", "Coco Free"),
        ("cocopaid", "Coco Paid"),
        ("cyndiecynthiacolby", "Cyndie, Cynthia & Colby"),
        ("dandfreeoftv", "Dan D Free / OFTV"),
        ("dandpaid", "Dan D Paid"),
        ("dandwelcome", "Dan D Welcome"),
        ("emilyraypaidfree", "Emily Ray Paid / Free"),
        ("essiepaidfree", "Essie Paid / Free"),
        ("gracefree", "Grace Free"),
        ("haileywfree", "Hailey W Free"),
        ("haileywpaid", "Hailey W Paid"),
        ("hazeyfree", "Hazey Free"),
        ("hazeypaid", "Hazey Paid"),
        ("hazeywelcome", "Hazey Welcome"),
        ("honeynoppv", "Honey NO PPV"),
        ("honeyvip", "Honey VIP"),
        ("isabellaxizziekay", "Isabella x Izzie Kay"),
        ("islafree", "Isla Free"),
        ("islaoftv", "Isla OFTV"),
        ("islapaid", "Isla Paid"),
        ("islawelcome", "Isla Welcome"),
        ("kayleexjasmyn", "Kaylee X Jasmyn"),
        ("kissingcousinsxvalerievip", "Kissing Cousins X Valerie VIP"),
        ("lexipaid", "Lexi Paid"),
        ("lilahfree", "Lilah Free"),
        ("lilahpaid", "Lilah Paid"),
        ("livv", "Livv"),
        ("mathildefree", "Mathilde Free"),
        ("mathildewelcome", "Mathilde Welcome"),
        ("mathildepaidxisaxalexalana", "Mathilde Paid x Isa A x Alexa Lana"),
        ("michellefree", "Michelle Free"),
        ("michellevip", "Michelle VIP"),
        ("mommycarter", "Mommy Carter"),
        ("natalialfree", "Natalia L Free"),
        ("natalialpaid", "Natalia L Paid"),
        ("natalialnicolefansly", "Natalia L, Nicole Fansly"),
        ("natalierfree", "Natalie R Free"),
        ("natalierpaid", "Natalie R Paid"),
        ("paris", "Paris"),
        ("popstfree", "Pops T Free"),
        ("popstpaid", "Pops T Paid"),
        ("rubirosefree", "Rubi Rose Free"),
        ("rubirosepaid", "Rubi Rose Paid"),
        ("salah", "Salah"),
        ("sarahc", "Sarah C"),
        ("skypaidfree", "Sky Paid / Free"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            timezone: default_timezone(),
            day_cutoff_hour: default_day_cutoff_hour(),
            shift_cutoffs: default_shift_cutoffs(),
            pages: default_pages(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftledger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparsable file is reported and replaced by
    /// defaults so the tool stays usable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    crate::ui::messages::warning(format!(
                        "Failed to parse {:?} ({}), using defaults",
                        path, e
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                crate::ui::messages::warning(format!(
                    "Failed to read {:?} ({}), using defaults",
                    path, e
                ));
                Config::default()
            }
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
