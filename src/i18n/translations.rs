// ABOUTME: Static display string tables for Chinese and English
// ABOUTME: One Translations value per language; numbers are interpolated by the renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Every display string the calculator shows
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub app_title: &'static str,

    // Tabs
    pub pace_calculation: &'static str,
    pub treadmill_conversion: &'static str,

    // Race names
    pub full_marathon: &'static str,
    pub half_marathon: &'static str,
    pub ten_k: &'static str,

    // Pace section
    pub target_finish_time: &'static str,
    pub pace: &'static str,
    pub adjust_pace: &'static str,
    pub drag_slider_to_adjust_pace: &'static str,
    pub minutes: &'static str,
    pub pace_result_title: &'static str,
    pub target_pace_is: &'static str,

    // Treadmill section
    pub treadmill_speed: &'static str,
    pub actual_pace: &'static str,
    pub equivalent_road_pace: &'static str,
    pub adjust_treadmill_speed: &'static str,
    pub drag_slider_to_adjust_speed: &'static str,
    pub speed_result_title: &'static str,
    pub treadmill: &'static str,
    pub road: &'static str,
    pub treadmill_tooltip: &'static str,

    // Validation notices
    pub enter_valid_time: &'static str,
    pub enter_hours_or_minutes: &'static str,
    pub enter_speed: &'static str,
    pub enter_treadmill_speed: &'static str,
    pub value_out_of_range: &'static str,
    pub missing_value: &'static str,
    pub invalid_format: &'static str,
    pub invalid_input: &'static str,
    /// `{field}` is replaced by a field name
    pub enter_field: &'static str,
    pub enter_number_for: &'static str,
    pub check_field: &'static str,
    pub pace_format_hint: &'static str,
    pub unit_format_hint: &'static str,
    pub race_format_hint: &'static str,
    pub language_format_hint: &'static str,
    /// `{field}`, `{min}`, `{max}` and `{unit}` are replaced
    pub range_between: &'static str,
    pub range_exceeded: &'static str,

    // Environment notices
    pub config_invalid: &'static str,
    pub config_invalid_hint: &'static str,
    pub storage_failed: &'static str,
    pub storage_failed_hint: &'static str,
    pub data_unreadable: &'static str,
    pub data_unreadable_hint: &'static str,

    // Field names
    pub field_finish_time: &'static str,
    pub field_hours: &'static str,
    pub field_minutes: &'static str,
    pub field_pace: &'static str,
    pub field_speed: &'static str,
    pub field_value: &'static str,
    pub field_unit: &'static str,
    pub field_race: &'static str,
    pub field_language: &'static str,

    // Unit toggle
    pub unit_switched: &'static str,
    pub language_switched: &'static str,
    pub kilometer: &'static str,
    pub mile: &'static str,

    // Units
    pub km: &'static str,
    pub mi: &'static str,
    pub kmh: &'static str,
    pub mih: &'static str,
    pub seconds: &'static str,
}

pub(super) const ZH: Translations = Translations {
    app_title: "马拉松配速助手",
    pace_calculation: "配速计算",
    treadmill_conversion: "跑步机转换",
    full_marathon: "全马",
    half_marathon: "半马",
    ten_k: "10KM",
    target_finish_time: "目标完赛时间",
    pace: "配速",
    adjust_pace: "调整配速",
    drag_slider_to_adjust_pace: "拖动滑块调整配速",
    minutes: "分钟",
    pace_result_title: "配速计算结果",
    target_pace_is: "您的目标配速为",
    treadmill_speed: "跑步机速度",
    actual_pace: "实际配速",
    equivalent_road_pace: "等效路跑配速",
    adjust_treadmill_speed: "调整跑步机速度",
    drag_slider_to_adjust_speed: "拖动滑块调整速度",
    speed_result_title: "速度转换结果",
    treadmill: "跑步机",
    road: "路跑",
    treadmill_tooltip: "在跑步机上跑步比在户外路跑更轻松，主要是因为没有空气阻力。通常来说，跑步机上的速度需要提高约4%才能达到与户外路跑相同的训练效果。",
    enter_valid_time: "请输入有效时间",
    enter_hours_or_minutes: "请输入小时或分钟",
    enter_speed: "请输入速度",
    enter_treadmill_speed: "请输入跑步机速度",
    value_out_of_range: "输入值超出范围",
    missing_value: "缺少输入",
    invalid_format: "输入格式无效",
    invalid_input: "输入无效",
    enter_field: "请输入{field}",
    enter_number_for: "请为{field}输入有效的数字",
    check_field: "请检查{field}",
    pace_format_hint: "配速请输入秒数（300）或 分:秒（5:00）",
    unit_format_hint: "单位请使用 km 或 mile",
    race_format_hint: "比赛请使用 full、half 或 10k",
    language_format_hint: "语言请使用 zh 或 en",
    range_between: "{field}应在 {min} 至 {max} {unit} 之间",
    range_exceeded: "{field}超出允许范围",
    config_invalid: "配置无效",
    config_invalid_hint: "请检查 PACE_DEFAULT_UNIT 和 PACE_DEFAULT_LANGUAGE 环境变量",
    storage_failed: "偏好设置保存失败",
    storage_failed_hint: "无法读取或写入偏好设置文件",
    data_unreadable: "数据格式错误",
    data_unreadable_hint: "偏好设置文件内容无法解析",
    field_finish_time: "完赛时间",
    field_hours: "小时",
    field_minutes: "分钟",
    field_pace: "配速",
    field_speed: "速度",
    field_value: "数值",
    field_unit: "单位",
    field_race: "比赛",
    field_language: "语言",
    unit_switched: "单位已切换为",
    language_switched: "语言已切换为",
    kilometer: "公里",
    mile: "英里",
    km: "km",
    mi: "mi",
    kmh: "km/h",
    mih: "mi/h",
    seconds: "秒",
};

pub(super) const EN: Translations = Translations {
    app_title: "Marathon Pace Assistant",
    pace_calculation: "Pace Calculation",
    treadmill_conversion: "Treadmill Conversion",
    full_marathon: "Full Marathon",
    half_marathon: "Half Marathon",
    ten_k: "10K",
    target_finish_time: "Target Finish Time",
    pace: "Pace",
    adjust_pace: "Adjust Pace",
    drag_slider_to_adjust_pace: "Drag slider to adjust pace",
    minutes: "min",
    pace_result_title: "Pace Result",
    target_pace_is: "Your target pace is",
    treadmill_speed: "Treadmill Speed",
    actual_pace: "Actual Pace",
    equivalent_road_pace: "Equivalent Road Pace",
    adjust_treadmill_speed: "Adjust Treadmill Speed",
    drag_slider_to_adjust_speed: "Drag slider to adjust speed",
    speed_result_title: "Speed Conversion Result",
    treadmill: "Treadmill",
    road: "road",
    treadmill_tooltip: "Running on a treadmill is easier than outdoor road running, mainly because there is no air resistance. Generally speaking, the speed on a treadmill needs to be increased by about 4% to achieve the same training effect as outdoor road running.",
    enter_valid_time: "Please enter a valid time",
    enter_hours_or_minutes: "Please enter hours or minutes",
    enter_speed: "Please enter a speed",
    enter_treadmill_speed: "Please enter the treadmill speed",
    value_out_of_range: "Value out of range",
    missing_value: "Missing input",
    invalid_format: "Invalid format",
    invalid_input: "Invalid input",
    enter_field: "Please enter the {field}",
    enter_number_for: "Enter a valid number for {field}",
    check_field: "Please check the {field}",
    pace_format_hint: "Enter the pace as seconds (300) or minutes:seconds (5:00)",
    unit_format_hint: "Use km or mile for the unit",
    race_format_hint: "Use full, half or 10k for the race",
    language_format_hint: "Use zh or en for the language",
    range_between: "The {field} must be between {min} and {max} {unit}",
    range_exceeded: "The {field} is outside the allowed range",
    config_invalid: "Invalid configuration",
    config_invalid_hint: "Check the PACE_DEFAULT_UNIT and PACE_DEFAULT_LANGUAGE environment variables",
    storage_failed: "Preference storage failed",
    storage_failed_hint: "The preference file could not be read or written",
    data_unreadable: "Unreadable data",
    data_unreadable_hint: "The preference file could not be parsed",
    field_finish_time: "finish time",
    field_hours: "hours",
    field_minutes: "minutes",
    field_pace: "pace",
    field_speed: "speed",
    field_value: "value",
    field_unit: "unit",
    field_race: "race",
    field_language: "language",
    unit_switched: "Unit switched to",
    language_switched: "Language switched to",
    kilometer: "kilometer",
    mile: "mile",
    km: "km",
    mi: "mi",
    kmh: "km/h",
    mih: "mi/h",
    seconds: "s",
};
