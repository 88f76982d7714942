//! Compiled-in table contents.

use crate::record::VariantRecord;
use crate::table::{ArchEntry, PlatformEntry};

pub(crate) static PLATFORMS: &[PlatformEntry] = &[
    PlatformEntry {
        platform: "win32",
        archs: WIN32,
    },
    PlatformEntry {
        platform: "linux",
        archs: LINUX,
    },
];

const WIN32: &[ArchEntry] = &[
    ArchEntry {
        arch: "arm64",
        variants: &[
            VariantRecord {
                triple: "aarch64-pc-windows-msvc",
                platform_arch_abi: "win32-arm64-msvc",
                platform: "win32",
                arch: "arm64",
                abi: "msvc",
            },
        ],
    },
    ArchEntry {
        arch: "i586",
        variants: &[
            VariantRecord {
                triple: "i586-pc-windows-msvc",
                platform_arch_abi: "win32-i586-msvc",
                platform: "win32",
                arch: "i586",
                abi: "msvc",
            },
        ],
    },
    ArchEntry {
        arch: "ia32",
        variants: &[
            VariantRecord {
                triple: "i686-pc-windows-gnu",
                platform_arch_abi: "win32-ia32-gnu",
                platform: "win32",
                arch: "ia32",
                abi: "gnu",
            },
            VariantRecord {
                triple: "i686-pc-windows-msvc",
                platform_arch_abi: "win32-ia32-msvc",
                platform: "win32",
                arch: "ia32",
                abi: "msvc",
            },
        ],
    },
    ArchEntry {
        arch: "x64",
        variants: &[
            VariantRecord {
                triple: "x86_64-pc-windows-gnu",
                platform_arch_abi: "win32-x64-gnu",
                platform: "win32",
                arch: "x64",
                abi: "gnu",
            },
            VariantRecord {
                triple: "x86_64-pc-windows-msvc",
                platform_arch_abi: "win32-x64-msvc",
                platform: "win32",
                arch: "x64",
                abi: "msvc",
            },
        ],
    },
];

const LINUX: &[ArchEntry] = &[
    ArchEntry {
        arch: "arm64",
        variants: &[
            VariantRecord {
                triple: "aarch64-unknown-linux-gnu",
                platform_arch_abi: "linux-arm64-gnu",
                platform: "linux",
                arch: "arm64",
                abi: "gnu",
            },
            VariantRecord {
                triple: "aarch64-unknown-linux-musl",
                platform_arch_abi: "linux-arm64-musl",
                platform: "linux",
                arch: "arm64",
                abi: "musl",
            },
        ],
    },
    ArchEntry {
        arch: "arm",
        variants: &[
            VariantRecord {
                triple: "arm-unknown-linux-gnueabi",
                platform_arch_abi: "linux-arm-gnueabi",
                platform: "linux",
                arch: "arm",
                abi: "gnueabi",
            },
            VariantRecord {
                triple: "arm-unknown-linux-gnueabihf",
                platform_arch_abi: "linux-arm-gnueabihf",
                platform: "linux",
                arch: "arm",
                abi: "gnueabihf",
            },
            VariantRecord {
                triple: "arm-unknown-linux-musleabi",
                platform_arch_abi: "linux-arm-musleabi",
                platform: "linux",
                arch: "arm",
                abi: "musleabi",
            },
            VariantRecord {
                triple: "arm-unknown-linux-musleabihf",
                platform_arch_abi: "linux-arm-musleabihf",
                platform: "linux",
                arch: "arm",
                abi: "musleabihf",
            },
            VariantRecord {
                triple: "armv7-unknown-linux-gnueabi",
                platform_arch_abi: "linux-arm-gnueabi",
                platform: "linux",
                arch: "arm",
                abi: "gnueabi",
            },
            VariantRecord {
                triple: "armv7-unknown-linux-gnueabihf",
                platform_arch_abi: "linux-arm-gnueabihf",
                platform: "linux",
                arch: "arm",
                abi: "gnueabihf",
            },
            VariantRecord {
                triple: "armv7-unknown-linux-musleabi",
                platform_arch_abi: "linux-arm-musleabi",
                platform: "linux",
                arch: "arm",
                abi: "musleabi",
            },
            VariantRecord {
                triple: "armv7-unknown-linux-musleabihf",
                platform_arch_abi: "linux-arm-musleabihf",
                platform: "linux",
                arch: "arm",
                abi: "musleabihf",
            },
        ],
    },
    ArchEntry {
        arch: "armv5te",
        variants: &[
            VariantRecord {
                triple: "armv5te-unknown-linux-gnueabi",
                platform_arch_abi: "linux-armv5te-gnueabi",
                platform: "linux",
                arch: "armv5te",
                abi: "gnueabi",
            },
            VariantRecord {
                triple: "armv5te-unknown-linux-musleabi",
                platform_arch_abi: "linux-armv5te-musleabi",
                platform: "linux",
                arch: "armv5te",
                abi: "musleabi",
            },
        ],
    },
    ArchEntry {
        arch: "i586",
        variants: &[
            VariantRecord {
                triple: "i586-unknown-linux-gnu",
                platform_arch_abi: "linux-i586-gnu",
                platform: "linux",
                arch: "i586",
                abi: "gnu",
            },
            VariantRecord {
                triple: "i586-unknown-linux-musl",
                platform_arch_abi: "linux-i586-musl",
                platform: "linux",
                arch: "i586",
                abi: "musl",
            },
        ],
    },
    ArchEntry {
        arch: "ia32",
        variants: &[
            VariantRecord {
                triple: "i686-unknown-linux-gnu",
                platform_arch_abi: "linux-ia32-gnu",
                platform: "linux",
                arch: "ia32",
                abi: "gnu",
            },
            VariantRecord {
                triple: "i686-unknown-linux-musl",
                platform_arch_abi: "linux-ia32-musl",
                platform: "linux",
                arch: "ia32",
                abi: "musl",
            },
        ],
    },
    ArchEntry {
        arch: "mips",
        variants: &[
            VariantRecord {
                triple: "mips-unknown-linux-gnu",
                platform_arch_abi: "linux-mips-gnu",
                platform: "linux",
                arch: "mips",
                abi: "gnu",
            },
            VariantRecord {
                triple: "mips-unknown-linux-musl",
                platform_arch_abi: "linux-mips-musl",
                platform: "linux",
                arch: "mips",
                abi: "musl",
            },
        ],
    },
    ArchEntry {
        arch: "mips64",
        variants: &[
            VariantRecord {
                triple: "mips64-unknown-linux-gnuabi64",
                platform_arch_abi: "linux-mips64-gnuabi64",
                platform: "linux",
                arch: "mips64",
                abi: "gnuabi64",
            },
            VariantRecord {
                triple: "mips64-unknown-linux-muslabi64",
                platform_arch_abi: "linux-mips64-muslabi64",
                platform: "linux",
                arch: "mips64",
                abi: "muslabi64",
            },
        ],
    },
    ArchEntry {
        arch: "mips64el",
        variants: &[
            VariantRecord {
                triple: "mips64el-unknown-linux-gnuabi64",
                platform_arch_abi: "linux-mips64el-gnuabi64",
                platform: "linux",
                arch: "mips64el",
                abi: "gnuabi64",
            },
            VariantRecord {
                triple: "mips64el-unknown-linux-muslabi64",
                platform_arch_abi: "linux-mips64el-muslabi64",
                platform: "linux",
                arch: "mips64el",
                abi: "muslabi64",
            },
        ],
    },
    ArchEntry {
        arch: "mipsel",
        variants: &[
            VariantRecord {
                triple: "mipsel-unknown-linux-gnu",
                platform_arch_abi: "linux-mipsel-gnu",
                platform: "linux",
                arch: "mipsel",
                abi: "gnu",
            },
            VariantRecord {
                triple: "mipsel-unknown-linux-musl",
                platform_arch_abi: "linux-mipsel-musl",
                platform: "linux",
                arch: "mipsel",
                abi: "musl",
            },
        ],
    },
    ArchEntry {
        arch: "powerpc",
        variants: &[
            VariantRecord {
                triple: "powerpc-unknown-linux-gnu",
                platform_arch_abi: "linux-powerpc-gnu",
                platform: "linux",
                arch: "powerpc",
                abi: "gnu",
            },
        ],
    },
    ArchEntry {
        arch: "powerpc64",
        variants: &[
            VariantRecord {
                triple: "powerpc64-unknown-linux-gnu",
                platform_arch_abi: "linux-powerpc64-gnu",
                platform: "linux",
                arch: "powerpc64",
                abi: "gnu",
            },
        ],
    },
    ArchEntry {
        arch: "powerpc64le",
        variants: &[
            VariantRecord {
                triple: "powerpc64le-unknown-linux-gnu",
                platform_arch_abi: "linux-powerpc64le-gnu",
                platform: "linux",
                arch: "powerpc64le",
                abi: "gnu",
            },
        ],
    },
    ArchEntry {
        arch: "riscv64gc",
        variants: &[
            VariantRecord {
                triple: "riscv64gc-unknown-linux-gnu",
                platform_arch_abi: "linux-riscv64gc-gnu",
                platform: "linux",
                arch: "riscv64gc",
                abi: "gnu",
            },
        ],
    },
    ArchEntry {
        arch: "s390x",
        variants: &[
            VariantRecord {
                triple: "s390x-unknown-linux-gnu",
                platform_arch_abi: "linux-s390x-gnu",
                platform: "linux",
                arch: "s390x",
                abi: "gnu",
            },
        ],
    },
    ArchEntry {
        arch: "sparc64",
        variants: &[
            VariantRecord {
                triple: "sparc64-unknown-linux-gnu",
                platform_arch_abi: "linux-sparc64-gnu",
                platform: "linux",
                arch: "sparc64",
                abi: "gnu",
            },
        ],
    },
    ArchEntry {
        arch: "thumbv7neon",
        variants: &[
            VariantRecord {
                triple: "thumbv7neon-unknown-linux-gnueabihf",
                platform_arch_abi: "linux-thumbv7neon-gnueabihf",
                platform: "linux",
                arch: "thumbv7neon",
                abi: "gnueabihf",
            },
        ],
    },
    ArchEntry {
        arch: "x64",
        variants: &[
            VariantRecord {
                triple: "x86_64-unknown-linux-gnu",
                platform_arch_abi: "linux-x64-gnu",
                platform: "linux",
                arch: "x64",
                abi: "gnu",
            },
            VariantRecord {
                triple: "x86_64-unknown-linux-gnux32",
                platform_arch_abi: "linux-x64-gnux32",
                platform: "linux",
                arch: "x64",
                abi: "gnux32",
            },
            VariantRecord {
                triple: "x86_64-unknown-linux-musl",
                platform_arch_abi: "linux-x64-musl",
                platform: "linux",
                arch: "x64",
                abi: "musl",
            },
        ],
    },
];
