//! The ordered feature catalog.
//!
//! Each entry names one leaf of the raw record and how it renders. The key
//! is the dotted path, so renaming a collector field without touching this
//! table changes every fingerprint. Order is kept for review diffs only;
//! serialization sorts keys.

use super::{Feature, Render};

macro_rules! feature {
    ($render:ident: $first:literal $(. $rest:literal)*) => {
        Feature {
            key: concat!($first $(, ".", $rest)*),
            path: &[$first $(, $rest)*],
            render: Render::$render,
        }
    };
}

/// Every extracted feature, in catalog order.
pub const CATALOG: &[Feature] = &[
    feature!(Json: "ghostDeviceInfo" . "audio" . "features"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "features" . "autoGainControl"),
    feature!(Text: "ghostDeviceInfo" . "storage" . "deviceType" . "confidence"),
    feature!(Text: "thumbmarkjs" . "audio" . "maxChannels"),
    feature!(Text: "ghostDeviceInfo" . "display" . "screen" . "colorDepth"),
    feature!(Text: "ghostDeviceInfo" . "cpu" . "architecture"),
    feature!(Text: "clientjs" . "isMobileIOS"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "motion" . "accelerometer"),
    feature!(Text: "thumbmarkjs" . "permissions" . "geolocation"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "pointing" . "precision"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "applePay"),
    feature!(Json: "ghostDeviceInfo" . "display" . "hdrSupport"),
    feature!(Json: "ghostDeviceInfo" . "inputDevices" . "touch"),
    feature!(Text: "ghostDeviceInfo" . "display" . "multipleDisplays"),
    feature!(Text: "clientjs" . "isIphone"),
    feature!(Text: "thumbmarkjs" . "permissions" . "microphone"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "invertedColors"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "hdr"),
    feature!(Text: "thumbmarkjs" . "screen" . "colorDepth"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "features" . "noiseSuppression"),
    feature!(Text: "clientjs" . "isMobileWindows"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxVaryingVectors"),
    feature!(Json: "ghostDeviceInfo" . "cpu" . "capabilities"),
    feature!(Text: "clientjs" . "isSolaris"),
    feature!(Text: "thumbmarkjs" . "math" . "sinh"),
    feature!(Text: "clientjs" . "isMobile"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "monochrome"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "errorToSource"),
    feature!(Text: "ghostIPData" . "country"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "features" . "midi"),
    feature!(Text: "ghostDeviceInfo" . "storage" . "quota"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "preserveDrawingBuffer"),
    feature!(Text: "thumbmarkjs" . "math" . "sin"),
    feature!(Text: "ghostDeviceInfo" . "memory" . "sharedMemorySupport"),
    feature!(Text: "thumbmarkjs" . "math" . "log"),
    feature!(Text: "thumbmarkjs" . "math" . "e"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "orientation" . "absolute"),
    feature!(Text: "ghostDeviceInfo" . "display" . "refreshRate"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "reducedMotion"),
    feature!(Text: "thumbmarkjs" . "audio" . "oscillator"),
    feature!(Text: "clientjs" . "isOpera"),
    feature!(Text: "clientjs" . "isFlash"),
    feature!(Text: "ghostDeviceInfo" . "storage" . "persistent"),
    feature!(Text: "clientjs" . "getBrowserData" . "cpu" . "architecture"),
    feature!(Text: "ghostDeviceInfo" . "display" . "screen" . "orientation" . "angle"),
    feature!(Text: "clientjs" . "isSilverlight"),
    feature!(Text: "ghostIPData" . "ip"),
    feature!(Text: "ghostIPData" . "region"),
    feature!(Text: "clientjs" . "isSafari"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "notifications"),
    feature!(Text: "thumbmarkjs" . "permissions" . "persistent-storage"),
    feature!(Text: "clientjs" . "isCookie"),
    feature!(Text: "ghostDeviceInfo" . "storage" . "deviceType" . "metrics" . "sampleSize"),
    feature!(Text: "clientjs" . "isIE"),
    feature!(Text: "ghostDeviceInfo" . "cpu" . "capabilities" . "atomics"),
    feature!(Text: "ghostDeviceInfo" . "memory" . "pressureLevel"),
    feature!(Json: "ghostDeviceInfo" . "sensors" . "orientation"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "touch" . "touchScreen"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxCubemapSize"),
    feature!(Text: "thumbmarkjs" . "math" . "largeTan"),
    feature!(Text: "ghostDeviceInfo" . "camera" . "count"),
    feature!(Text: "thumbmarkjs" . "math" . "acos"),
    feature!(Json: "ghostDeviceInfo" . "sensors" . "light"),
    feature!(Text: "thumbmarkjs" . "math" . "asin"),
    feature!(Text: "thumbmarkjs" . "permissions" . "notifications"),
    feature!(Text: "ghostDeviceInfo" . "cpu" . "performanceMetrics" . "unit"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "colorDepth"),
    feature!(Text: "ghostDeviceInfo" . "cpu" . "capabilities" . "simd"),
    feature!(Text: "clientjs" . "isLinux"),
    feature!(Text: "thumbmarkjs" . "permissions" . "midi"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "antialias"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "powerPreference"),
    feature!(Text: "clientjs" . "getJavaVersion"),
    feature!(Text: "clientjs" . "osVersion"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "pointing" . "primaryInput"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "permissions" . "ambient-light-sensor"),
    feature!(Text: "ghostDeviceInfo" . "network" . "performanceMetrics" . "type"),
    feature!(Json: "ghostIPData"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "getAttributeNames"),
    feature!(Text: "ghostDeviceInfo" . "display" . "resolution" . "physical" . "height"),
    feature!(Json: "clientjs" . "getBrowserData" . "cpu"),
    feature!(Text: "thumbmarkjs" . "system" . "applePayVersion"),
    feature!(Text: "ghostDeviceInfo" . "cpu" . "capabilities" . "threads"),
    feature!(Text: "thumbmarkjs" . "math" . "tanh"),
    feature!(Text: "thumbmarkjs" . "system" . "product"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "depth"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "keyboard" . "present"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "contrast"),
    feature!(Text: "clientjs" . "isFont"),
    feature!(Text: "clientjs" . "isLocalStorage"),
    feature!(Json: "ghostDeviceInfo" . "camera"),
    feature!(Text: "ghostDeviceInfo" . "display" . "screen" . "pixelDepth"),
    feature!(Text: "thumbmarkjs" . "system" . "platform"),
    feature!(Text: "thumbmarkjs" . "math" . "largeCos"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "capabilities" . "sampleRate"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "light" . "supported"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxViewportDims" . "0"),
    feature!(Text: "ghostDeviceInfo" . "storage" . "deviceType" . "likely"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "timezoneOffset"),
    feature!(Text: "clientjs" . "isMac"),
    feature!(Text: "clientjs" . "getCustomFingerprint"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "touch" . "maxTouchPoints"),
    feature!(Text: "thumbmarkjs" . "permissions" . "camera"),
    feature!(Text: "thumbmarkjs" . "hardware" . "architecture"),
    feature!(Text: "thumbmarkjs" . "math" . "atan"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "pluginLengthIsZero"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "touch" . "coarsePrimary"),
    feature!(Json: "ghostDeviceInfo" . "sensors" . "environmental"),
    feature!(Json: "ghostDeviceInfo" . "graphics" . "hardwareAcceleration"),
    feature!(Text: "thumbmarkjs" . "math" . "cos"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "environmental" . "ambientLight"),
    feature!(Text: "clientjs" . "isWindows"),
    feature!(Text: "thumbmarkjs" . "locales" . "timezone"),
    feature!(Text: "thumbmarkjs" . "math" . "cosh"),
    feature!(Text: "clientjs" . "isUbuntu"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "pointing" . "hasPointer"),
    feature!(Json: "ghostDeviceInfo" . "audio" . "inputs"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "platform"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxViewportDims" . "1"),
    feature!(Text: "thumbmarkjs" . "audio" . "channelCountMode"),
    feature!(Json: "thumbmarkjs" . "math"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "premultipliedAlpha"),
    feature!(Text: "thumbmarkjs" . "math" . "sqrt"),
    feature!(Text: "ghostDeviceInfo" . "display" . "hdrSupport" . "colorDepth"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "alpha"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "proximity" . "supported"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "biometric" . "platformAuthenticator"),
    feature!(Text: "clientjs" . "getBrowserData" . "os" . "name"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "hardwareAcceleration" . "webGL"),
    feature!(Text: "clientjs" . "colorDepth"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxFragmentUniformVectors"),
    feature!(Text: "thumbmarkjs" . "math" . "tan"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "features" . "spatialAudio"),
    feature!(Text: "clientjs" . "getFlashVersion"),
    feature!(Text: "clientjs" . "isMobileOpera"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "cpuClass"),
    feature!(Json: "clientjs" . "getBrowserData" . "os"),
    feature!(Text: "thumbmarkjs" . "math" . "largeSin"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "sharedArrayBuffer"),
    feature!(Json: "ghostDeviceInfo" . "display" . "screen" . "orientation"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "timezone"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxVertexAttributes"),
    feature!(Text: "clientjs" . "isIpod"),
    feature!(Text: "clientjs" . "os"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "webdriver"),
    feature!(Text: "thumbmarkjs" . "screen" . "maxTouchPoints"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "touch" . "finePrimary"),
    feature!(Text: "clientjs" . "cpu"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "forcedColors"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "stencil"),
    feature!(Text: "ghostDeviceInfo" . "display" . "screen" . "orientation" . "type"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "contextAttributes" . "failIfMajorPerformanceCaveat"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "biometric" . "credentials"),
    feature!(Text: "ghostDeviceInfo" . "storage" . "performance"),
    feature!(Text: "ghostDeviceInfo" . "display" . "screen" . "deviceXDPI"),
    feature!(Text: "clientjs" . "isSessionStorage"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "attributionsourceid"),
    feature!(Text: "clientjs" . "timeZone"),
    feature!(Json: "ghostDeviceInfo" . "inputDevices" . "biometric"),
    feature!(Text: "clientjs" . "isIpad"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxTextureSize"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "maxTouchPoints"),
    feature!(Text: "opfsFingerprint" . "additionalInfo" . "sourceBuffer"),
    feature!(Text: "ghostIPData" . "city"),
    feature!(Text: "clientjs" . "isMobileBlackBerry"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "virtualReality" . "vrDisplay"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "capabilities" . "maxChannelCount"),
    feature!(Text: "thumbmarkjs" . "system" . "cookieEnabled"),
    feature!(Text: "ghostDeviceInfo" . "network" . "onLine"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "virtualReality" . "features" . "orientation"),
    feature!(Text: "thumbmarkjs" . "math" . "pi"),
    feature!(Text: "ghostDeviceInfo" . "audio" . "features" . "echoCancellation"),
    feature!(Json: "ghostDeviceInfo" . "sensors" . "proximity"),
    feature!(Text: "thumbmarkjs" . "screen" . "is_touchscreen"),
    feature!(Text: "ghostDeviceInfo" . "inputDevices" . "pointing" . "maxPointers"),
    feature!(Text: "clientjs" . "isJava"),
    feature!(Text: "clientjs" . "isCanvas"),
    feature!(Json: "ghostDeviceInfo" . "sensors" . "motion"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxRenderbufferSize"),
    feature!(Text: "ghostDeviceInfo" . "display" . "hdrSupport" . "hdrSupported"),
    feature!(Json: "ghostDeviceInfo" . "inputDevices" . "pointing"),
    feature!(Text: "ghostDeviceInfo" . "graphics" . "hardwareAcceleration" . "canvas2D"),
    feature!(Text: "clientjs" . "getBrowserData" . "os" . "version"),
    feature!(Text: "ghostDeviceInfo" . "sensors" . "motion" . "gyroscope"),
    feature!(Text: "ghostDeviceInfo" . "display" . "screen" . "deviceYDPI"),
    feature!(Text: "clientjs" . "isMobileMajor"),
    feature!(Json: "ghostDeviceInfo" . "graphics" . "capabilities" . "maxViewportDims"),
    feature!(Text: "clientjs" . "isMobileAndroid"),
    feature!(Text: "clientjs" . "isMimeTypes"),
];

