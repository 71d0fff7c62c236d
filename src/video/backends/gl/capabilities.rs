use std::cmp;
use std::ffi;

use gl::types::*;

use crate::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        Version::from_desc(&parse_str(gl::VERSION)?)
    }

    /// Parses the string returned by `glGetString(GL_VERSION)`, e.g. `"3.3.0 NVIDIA 390.87"`
    /// or `"OpenGL ES 3.0 Mesa 18.0.5"`.
    pub fn from_desc(desc: &str) -> Result<Version> {
        let malformed = || format_err!("[GL] Version string '{}' is malformed.", desc);

        let (es, rest) = if desc.starts_with("OpenGL ES ") {
            (true, &desc["OpenGL ES ".len()..])
        } else if desc.starts_with("OpenGL ES-") {
            // A profile name such as `CM` precedes the version, e.g. "OpenGL ES-CM 1.1".
            let rest = desc["OpenGL ES-".len()..]
                .splitn(2, ' ')
                .nth(1)
                .ok_or_else(malformed)?;
            (true, rest)
        } else {
            (false, desc)
        };

        let number = rest.split(' ').next().ok_or_else(malformed)?;

        let mut iter = number.split('.');
        let mut next = || -> Result<u8> {
            let v = iter
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(malformed)?;
            Ok(v)
        };

        let major = next()?;
        let minor = next()?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The version of the shading language supported by the compiler.
    pub shading_language: String,

    /// The smallest and largest supported sizes for points.
    pub point_size_range: (f32, f32),

    /// The range of widths supported for aliased lines.
    pub line_width_range: (f32, f32),
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::parse()?;

        Ok(Capabilities {
            version,
            vendor: parse_str(gl::VENDOR)?,
            renderer: parse_str(gl::RENDERER)?,
            shading_language: parse_str(gl::SHADING_LANGUAGE_VERSION)?,
            point_size_range: Capabilities::parse_range(gl::POINT_SIZE_RANGE),
            line_width_range: Capabilities::parse_range(gl::ALIASED_LINE_WIDTH_RANGE),
        })
    }

    #[inline]
    unsafe fn parse_range(id: GLenum) -> (f32, f32) {
        let mut val: [GLfloat; 2] = [1.0, 1.0];
        gl::GetFloatv(id, val.as_mut_ptr());
        (val[0], val[1])
    }
}

#[inline]
unsafe fn parse_str(id: GLenum) -> Result<String> {
    let s = gl::GetString(id);
    if s.is_null() {
        bail!("[GL] String of {} is null.", id);
    }

    String::from_utf8(ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec())
        .map_err(|_| format_err!("[GL] String of {} is malformed.", id))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_desc() {
        assert_eq!(
            Version::from_desc("3.3.0 NVIDIA 390.87").unwrap(),
            Version::GL(3, 3)
        );
        assert_eq!(
            Version::from_desc("4.6 (Core Profile) Mesa 21.2.6").unwrap(),
            Version::GL(4, 6)
        );
        assert_eq!(
            Version::from_desc("OpenGL ES 3.0 Mesa 18.0.5").unwrap(),
            Version::ES(3, 0)
        );
        assert_eq!(
            Version::from_desc("OpenGL ES-CM 1.1").unwrap(),
            Version::ES(1, 1)
        );
        assert!(Version::from_desc("garbage").is_err());
        assert!(Version::from_desc("OpenGL ES-C").is_err());
        assert!(Version::from_desc("OpenGL ES-").is_err());
        assert!(Version::from_desc("OpenGL ES ").is_err());
    }

    #[test]
    fn version_order() {
        assert!(Version::GL(3, 3) >= Version::GL(3, 3));
        assert!(Version::GL(4, 1) > Version::GL(3, 3));
        assert!(Version::GL(3, 2) < Version::GL(3, 3));
        assert!(!(Version::ES(3, 0) >= Version::GL(3, 0)));
        assert!(!(Version::GL(3, 0) >= Version::ES(3, 0)));
    }
}
