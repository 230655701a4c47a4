//! Registry and override documents shared across integration tests.

use apispec::{OverloadDocument, Registry};
use once_cell::sync::Lazy;

/// A cut-down GL registry: two APIs, profile removals, three extensions.
pub const GL_REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>Fixture registry</comment>
    <types>
        <type name="khrplatform">#include &lt;KHR/khrplatform.h&gt;</type>
        <type requires="khrplatform">typedef khronos_int8_t <name>GLbyte</name>;</type>
        <type>typedef unsigned int <name>GLenum</name>;</type>
        <type>typedef unsigned char <name>GLboolean</name>;</type>
        <type>typedef int <name>GLint</name>;</type>
        <type>typedef unsigned int <name>GLuint</name>;</type>
        <type>typedef int <name>GLsizei</name>;</type>
        <type>typedef float <name>GLfloat</name>;</type>
        <type>typedef char <name>GLchar</name>;</type>
        <type>typedef void (<apientry/> *<name>GLDEBUGPROC</name>)(GLenum source, const GLchar *message);</type>
        <type>typedef struct __GLsync *<name>GLsync</name>;</type>
        <type api="gles2">typedef khronos_uint32_t <name>GLenum</name>;</type>
    </types>
    <groups>
        <group name="Boolean"><enum name="GL_TRUE"/></group>
    </groups>
    <enums namespace="GL" group="Boolean">
        <enum value="1" name="GL_TRUE"/>
    </enums>
    <enums namespace="GL" start="0x0000" end="0x7FFF">
        <enum value="0x0007" name="GL_QUADS"/>
        <enum value="0x8892" name="GL_ARRAY_BUFFER"/>
        <enum value="0x92E0" name="GL_DEBUG_OUTPUT"/>
        <enum value="0x9117" name="GL_SYNC_FENCE"/>
        <enum value="0x86F1" name="GL_TANGENT_ARRAY_NV"/>
    </enums>
    <commands namespace="GL">
        <command>
            <proto>void <name>glEnable</name></proto>
            <param group="EnableCap"><ptype>GLenum</ptype> <name>cap</name></param>
        </command>
        <command api="gles2">
            <proto>void <name>glEnable</name></proto>
            <param><ptype>GLenum</ptype> <name>cap</name></param>
        </command>
        <command>
            <proto>void <name>glBegin</name></proto>
            <param><ptype>GLenum</ptype> <name>mode</name></param>
            <glx type="render" opcode="4"/>
        </command>
        <command>
            <proto>const <ptype>GLubyte</ptype> *<name>glGetString</name></proto>
            <param><ptype>GLenum</ptype> <name>name</name></param>
        </command>
        <command>
            <proto>void <name>glGenBuffers</name></proto>
            <param><ptype>GLsizei</ptype> <name>n</name></param>
            <param len="n"><ptype>GLuint</ptype> *<name>buffers</name></param>
        </command>
        <command>
            <proto>void <name>glVertexAttribPointer</name></proto>
            <param><ptype>GLuint</ptype> <name>index</name></param>
            <param><ptype>GLint</ptype> <name>size</name></param>
            <param><ptype>GLenum</ptype> <name>type</name></param>
            <param><ptype>GLboolean</ptype> <name>normalized</name></param>
            <param><ptype>GLsizei</ptype> <name>stride</name></param>
            <param>const void *<name>pointer</name></param>
        </command>
        <command>
            <proto>void <name>glShaderSource</name></proto>
            <param><ptype>GLuint</ptype> <name>shader</name></param>
            <param><ptype>GLsizei</ptype> <name>count</name></param>
            <param>const <ptype>GLchar</ptype> *const*<name>string</name></param>
            <param>const <ptype>GLint</ptype> *<name>length</name></param>
        </command>
        <command>
            <proto><ptype>GLsync</ptype> <name>glFenceSync</name></proto>
            <param><ptype>GLenum</ptype> <name>condition</name></param>
            <param><ptype>GLbitfield</ptype> <name>flags</name></param>
        </command>
        <command>
            <proto>void <name>glDebugMessageCallback</name></proto>
            <param><ptype>GLDEBUGPROC</ptype> <name>callback</name></param>
            <param>const void *<name>userParam</name></param>
        </command>
        <command>
            <proto>void <name>glTangent3fNV</name></proto>
            <param><ptype>GLfloat</ptype> <name>tx</name></param>
            <param><ptype>GLbyte</ptype> <name>ty</name></param>
        </command>
    </commands>
    <feature api="gl" name="GL_VERSION_1_0" number="1.0">
        <require>
            <command name="glEnable"/>
            <command name="glBegin"/>
            <command name="glGetString"/>
            <enum name="GL_TRUE"/>
            <enum name="GL_QUADS"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_1_5" number="1.5">
        <require>
            <command name="glGenBuffers"/>
            <enum name="GL_ARRAY_BUFFER"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_2_0" number="2.0">
        <require>
            <command name="glVertexAttribPointer"/>
            <command name="glShaderSource"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_3_2" number="3.2">
        <require>
            <command name="glFenceSync"/>
            <enum name="GL_SYNC_FENCE"/>
        </require>
        <remove profile="core" comment="Compatibility-only features">
            <command name="glBegin"/>
            <enum name="GL_QUADS"/>
        </remove>
    </feature>
    <feature api="gl" name="GL_VERSION_4_3" number="4.3">
        <require>
            <command name="glDebugMessageCallback"/>
            <enum name="GL_DEBUG_OUTPUT"/>
        </require>
    </feature>
    <feature api="gles2" name="GL_ES_VERSION_2_0" number="2.0">
        <require>
            <command name="glEnable"/>
            <command name="glGenBuffers"/>
            <command name="glVertexAttribPointer"/>
            <enum name="GL_TRUE"/>
            <enum name="GL_ARRAY_BUFFER"/>
        </require>
    </feature>
    <extensions>
        <extension name="GL_ARB_sync" supported="gl|glcore">
            <require>
                <command name="glFenceSync"/>
                <enum name="GL_SYNC_FENCE"/>
            </require>
        </extension>
        <extension name="GL_KHR_debug" supported="gl|glcore|gles2">
            <require>
                <command name="glDebugMessageCallback"/>
                <enum name="GL_DEBUG_OUTPUT"/>
            </require>
        </extension>
        <extension name="GL_NV_tangent" supported="gl">
            <require>
                <command name="glTangent3fNV"/>
                <enum name="GL_TANGENT_ARRAY_NV"/>
            </require>
        </extension>
    </extensions>
</registry>
"#;

pub const GL_OVERLOADS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<overloads>
    <overload name="glVertexAttribPointer" overloadName="glVertexAttribPointerWithOffset">
        <parameterChanges>
            <change index="5">
                <name value="offset"/>
                <type signature="uintptr_t"/>
            </change>
        </parameterChanges>
    </overload>
</overloads>
"#;

/// The fixture registry with its overloads applied, parsed once.
pub static GL: Lazy<Registry> = Lazy::new(|| {
    let mut registry: Registry = GL_REGISTRY.parse().expect("fixture registry should parse");
    let overloads: OverloadDocument = GL_OVERLOADS.parse().expect("fixture overloads should parse");
    registry
        .apply_overloads(&overloads)
        .expect("fixture overloads should apply");
    registry
});
