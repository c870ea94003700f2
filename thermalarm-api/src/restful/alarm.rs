pub const ALARM_STATUS: &str = "alarm/status";
pub const ALARM_ON: &str = "alarm/on";
pub const ALARM_OFF: &str = "alarm/off";
