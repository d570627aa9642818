//! The AAPS icon set
//!
//! Converted from the AAPS vector drawables
//!
//! Every icon is a lazily built [`IconDefinition`] static. Use [`crate::get`] to
//! resolve an icon by name at runtime.

use std::sync::LazyLock;

use aaps_vector::IconDefinition;

mod common;
mod legacy;
mod library;

pub use common::*;
pub use legacy::*;
pub use library::*;

/// Name-to-static table backing the registry, sorted by name
pub(crate) static ICONS: &[(&str, &LazyLock<IconDefinition>)] = &[
    ("Byoda", &BYODA),
    ("Calibration", &CALIBRATION),
    ("ChildBack", &CHILD_BACK),
    ("ChildFront", &CHILD_FRONT),
    ("IcActivity", &IC_ACTIVITY),
    ("IcActivityTreatments", &IC_ACTIVITY_TREATMENTS),
    ("IcAnnouncement", &IC_ANNOUNCEMENT),
    ("IcArrowCenter", &IC_ARROW_CENTER),
    ("IcArrowDoubleDown", &IC_ARROW_DOUBLE_DOWN),
    ("IcArrowDoubleUp", &IC_ARROW_DOUBLE_UP),
    ("IcArrowFlat", &IC_ARROW_FLAT),
    ("IcArrowFortyfiveDown", &IC_ARROW_FORTYFIVE_DOWN),
    ("IcArrowInvalid", &IC_ARROW_INVALID),
    ("IcArrowLeftDown", &IC_ARROW_LEFT_DOWN),
    ("IcArrowLeftUp", &IC_ARROW_LEFT_UP),
    ("IcArrowSimpleDown", &IC_ARROW_SIMPLE_DOWN),
    ("IcArrowSimpleUp", &IC_ARROW_SIMPLE_UP),
    ("IcAs", &IC_AS),
    ("IcAsAbove", &IC_AS_ABOVE),
    ("IcAsAboveX", &IC_AS_ABOVE_X),
    ("IcAsBelow", &IC_AS_BELOW),
    ("IcAsBelowX", &IC_AS_BELOW_X),
    ("IcAsX", &IC_AS_X),
    ("IcBgCheck", &IC_BG_CHECK),
    ("IcBolus", &IC_BOLUS),
    ("IcByoda", &IC_BYODA),
    ("IcCalculator", &IC_CALCULATOR),
    ("IcCalibration", &IC_CALIBRATION),
    ("IcCancelExtendedBolus", &IC_CANCEL_EXTENDED_BOLUS),
    ("IcCanulaChange", &IC_CANULA_CHANGE),
    ("IcCarbs", &IC_CARBS),
    ("IcCgmInsert", &IC_CGM_INSERT),
    ("IcExtendedBolus", &IC_EXTENDED_BOLUS),
    ("IcHistory", &IC_HISTORY),
    ("IcLoopDisconnected", &IC_LOOP_DISCONNECTED),
    ("IcLoopHidden", &IC_LOOP_HIDDEN),
    ("IcLoopLgs", &IC_LOOP_LGS),
    ("IcLoopOpen", &IC_LOOP_OPEN),
    ("IcLoopReconnect", &IC_LOOP_RECONNECT),
    ("IcLoopSuperbolus", &IC_LOOP_SUPERBOLUS),
    ("IcNoTbr", &IC_NO_TBR),
    ("IcNote", &IC_NOTE),
    ("IcPluginAction", &IC_PLUGIN_ACTION),
    ("IcPluginAutomation", &IC_PLUGIN_AUTOMATION),
    ("IcPluginAutotune", &IC_PLUGIN_AUTOTUNE),
    ("IcPluginByoda", &IC_PLUGIN_BYODA),
    ("IcPluginConfigBuilder", &IC_PLUGIN_CONFIG_BUILDER),
    ("IcPluginFood", &IC_PLUGIN_FOOD),
    ("IcPluginGlimp", &IC_PLUGIN_GLIMP),
    ("IcPluginInsulin", &IC_PLUGIN_INSULIN),
    ("IcPluginMaintenance", &IC_PLUGIN_MAINTENANCE),
    ("IcPluginObjectives", &IC_PLUGIN_OBJECTIVES),
    ("IcPluginOpenAPS", &IC_PLUGIN_OPEN_APS),
    ("IcPluginOverview", &IC_PLUGIN_OVERVIEW),
    ("IcPluginRandomBg", &IC_PLUGIN_RANDOM_BG),
    ("IcPluginSms", &IC_PLUGIN_SMS),
    ("IcPluginTomato", &IC_PLUGIN_TOMATO),
    ("IcPluginVirtualPump", &IC_PLUGIN_VIRTUAL_PUMP),
    ("IcPluginWear", &IC_PLUGIN_WEAR),
    ("IcProfile", &IC_PROFILE),
    ("IcPumpBattery", &IC_PUMP_BATTERY),
    ("IcPumpCartridge", &IC_PUMP_CARTRIDGE),
    ("IcQuestion", &IC_QUESTION),
    ("IcQuickwizard", &IC_QUICKWIZARD),
    ("IcSettingsOff", &IC_SETTINGS_OFF),
    ("IcSiteRotation", &IC_SITE_ROTATION),
    ("IcSmb", &IC_SMB),
    ("IcTbrCancel", &IC_TBR_CANCEL),
    ("IcTbrHigh", &IC_TBR_HIGH),
    ("IcTbrLow", &IC_TBR_LOW),
    ("IcTdd", &IC_TDD),
    ("IcTtActivity", &IC_TT_ACTIVITY),
    ("IcTtCancel", &IC_TT_CANCEL),
    ("IcTtEatingSoon", &IC_TT_EATING_SOON),
    ("IcTtHigh", &IC_TT_HIGH),
    ("IcTtHypo", &IC_TT_HYPO),
    ("IcTtManual", &IC_TT_MANUAL),
    ("IcUserEntry", &IC_USER_ENTRY),
    ("IcXDrip", &IC_X_DRIP),
    ("ManBack", &MAN_BACK),
    ("WomanBack", &WOMAN_BACK),
    ("WomanFront", &WOMAN_FRONT),
    ("XDrip", &X_DRIP),
];
